/// Right ascension of the North Galactic Pole, degrees (J2000).
///
/// IAU 1958 Galactic pole carried to the J2000 equinox: the NGP sits at
/// RA 12h51m26.28s, Dec +27°07'41.7". These constants define the frame;
/// they are not updated for precession past J2000.
pub(crate) const GALACTIC_POLE_RA_DEG: f64 = 192.85948;

/// Declination of the North Galactic Pole, degrees (J2000).
pub(crate) const GALACTIC_POLE_DEC_DEG: f64 = 27.12825;

/// Galactic longitude of the North Celestial Pole, degrees.
///
/// Fixes the zero point of longitude so that l = 0° points at the
/// Galactic center.
pub(crate) const NCP_GALACTIC_LONGITUDE_DEG: f64 = 123.0;

/// Below this magnitude a cos-based denominator is treated as the exact
/// polar limit rather than divided by; see the conversion methods.
pub(crate) const POLAR_DENOMINATOR_EPS: f64 = 1e-10;
