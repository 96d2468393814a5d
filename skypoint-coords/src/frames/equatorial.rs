//! Equatorial (RA/Dec) positions and the conversion to the Galactic
//! frame.

use std::fmt;

use skypoint_core::math::checked_asin;
use skypoint_core::Angle;

use crate::constants::{
    GALACTIC_POLE_DEC_DEG, GALACTIC_POLE_RA_DEG, NCP_GALACTIC_LONGITUDE_DEG,
    POLAR_DENOMINATOR_EPS,
};
use crate::errors::CoordResult;

use super::galactic::GalacticPosition;

/// A direction on the celestial sphere in the equatorial frame (J2000).
///
/// Right ascension normalizes into [0°, 360°); declination must sit in
/// [-90°, +90°].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquatorialPosition {
    right_ascension: Angle,
    declination: Angle,
}

impl EquatorialPosition {
    /// Creates a position from validated angles.
    pub fn new(right_ascension: Angle, declination: Angle) -> CoordResult<Self> {
        let right_ascension = right_ascension.validate_right_ascension()?;
        let declination = declination.validate_declination()?;
        Ok(Self {
            right_ascension,
            declination,
        })
    }

    /// Creates a position from degrees.
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_degrees(ra_deg), Angle::from_degrees(dec_deg))
    }

    /// Creates a position from RA in sidereal hours and Dec in degrees,
    /// the form star catalogs usually print.
    pub fn from_hours_degrees(ra_hours: f64, dec_deg: f64) -> CoordResult<Self> {
        Self::new(Angle::from_hours(ra_hours), Angle::from_degrees(dec_deg))
    }

    #[inline]
    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    #[inline]
    pub fn declination(&self) -> Angle {
        self.declination
    }

    /// Converts to Galactic coordinates using the fixed J2000 pole.
    ///
    /// Latitude from the angular distance to the North Galactic Pole;
    /// longitude from the arcsine identity around the pole's meridian,
    /// measured back from the longitude of the North Celestial Pole. The
    /// arcsine branch is the defining form here; it covers every pointing
    /// the horizontal pipeline produces.
    ///
    /// At the Galactic poles cos(b) vanishes and the longitude quotient is
    /// 0/0; longitude degenerates there, and the NCP value is substituted
    /// for the indeterminate quotient.
    pub fn to_galactic(&self) -> CoordResult<GalacticPosition> {
        let pole_ra = Angle::from_degrees(GALACTIC_POLE_RA_DEG);
        let (sin_pole_dec, cos_pole_dec) =
            Angle::from_degrees(GALACTIC_POLE_DEC_DEG).sin_cos();

        let (sin_dec, cos_dec) = self.declination.sin_cos();
        let (sin_dra, cos_dra) =
            Angle::from_radians(self.right_ascension.radians() - pole_ra.radians()).sin_cos();

        let sin_b = sin_dec * sin_pole_dec + cos_dec * cos_pole_dec * cos_dra;
        let b = checked_asin("galactic latitude", sin_b)?;

        let cos_b = b.cos();
        let sin_offset = if cos_b.abs() < POLAR_DENOMINATOR_EPS {
            0.0
        } else {
            cos_dec * sin_dra / cos_b
        };
        let offset = checked_asin("galactic longitude", sin_offset)?;

        let l = NCP_GALACTIC_LONGITUDE_DEG.to_radians() - offset;

        GalacticPosition::new(Angle::from_radians(l), Angle::from_radians(b))
    }
}

impl fmt::Display for EquatorialPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RA {:.4}°, Dec {:+.4}°",
            self.right_ascension.degrees(),
            self.declination.degrees()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn galactic(ra: f64, dec: f64) -> GalacticPosition {
        EquatorialPosition::from_degrees(ra, dec)
            .unwrap()
            .to_galactic()
            .unwrap()
    }

    #[test]
    fn test_construction_validates() {
        assert!(EquatorialPosition::from_degrees(139.26, 6.99).is_ok());
        assert!(EquatorialPosition::from_degrees(0.0, 91.0).is_err());
        assert!(EquatorialPosition::from_degrees(f64::NAN, 0.0).is_err());

        // RA is cyclic and normalizes.
        let eq = EquatorialPosition::from_degrees(-20.0, 0.0).unwrap();
        assert!((eq.right_ascension().degrees() - 340.0).abs() < 1e-10);
    }

    #[test]
    fn test_from_hours_degrees() {
        // Vega: 18h36m56.3s ~ 279.2347°.
        let eq = EquatorialPosition::from_hours_degrees(18.615649, 38.78369).unwrap();
        assert!((eq.right_ascension().degrees() - 279.234735).abs() < 1e-4);
    }

    #[test]
    fn test_solstice_scenario_golden() {
        let gal = galactic(139.25645987102845, 6.992956910489892);
        assert!(
            (gal.longitude().degrees() - 201.66137356372306).abs() < 1e-9,
            "l: {}",
            gal.longitude().degrees()
        );
        assert!(
            (gal.latitude().degrees() - 35.42834342532462).abs() < 1e-9,
            "b: {}",
            gal.latitude().degrees()
        );
    }

    #[test]
    fn test_vega_golden() {
        let gal = galactic(279.23473479, 38.78368896);
        assert!((gal.longitude().degrees() - 67.51628298814158).abs() < 1e-9);
        assert!((gal.latitude().degrees() - 19.237252445090853).abs() < 1e-9);
    }

    #[test]
    fn test_north_galactic_pole_maps_to_plus_90() {
        // The NGP itself: b = +90°, longitude degenerate (the polar guard
        // substitutes the NCP longitude for the 0/0 quotient).
        let gal = galactic(192.85948, 27.12825);
        assert!((gal.latitude().degrees() - 90.0).abs() < 1e-7);
        assert!((gal.longitude().degrees() - 123.0).abs() < 1e-7);
    }

    #[test]
    fn test_south_galactic_pole_maps_to_minus_90() {
        let gal = galactic(192.85948 - 180.0, -27.12825);
        assert!((gal.latitude().degrees() + 90.0).abs() < 1e-7);
    }

    #[test]
    fn test_latitude_sign_tracks_pole_side() {
        // A direction near the NGP is high-latitude positive; near the
        // anti-pole it is negative.
        let near_pole = galactic(190.0, 30.0);
        assert!(near_pole.latitude().degrees() > 80.0);

        let near_anti = galactic(10.0, -25.0);
        assert!(near_anti.latitude().degrees() < -80.0);
    }

    #[test]
    fn test_display() {
        let eq = EquatorialPosition::from_degrees(139.2565, 6.993).unwrap();
        assert_eq!(eq.to_string(), "RA 139.2565°, Dec +6.9930°");
    }
}
