//! Coordinate frames and the two frame conversions of the pointing
//! pipeline.
//!
//! Three validated position types, one per frame:
//!
//! - [`HorizontalPosition`] — altitude/azimuth against the observer's
//!   horizon, the frame a telescope or antenna is actually pointed in.
//! - [`EquatorialPosition`] — right ascension/declination (J2000).
//! - [`GalacticPosition`] — longitude/latitude against the Milky Way's
//!   plane and center.
//!
//! Conversions are methods, composing forward only:
//!
//! ```
//! use skypoint_core::Location;
//! use skypoint_time::{CalendarTime, SiderealTime};
//! use skypoint_coords::HorizontalPosition;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Location::from_degrees(51.5, 0.0)?;
//! let time = CalendarTime::new(2024, 6, 21, 12, 0, 0.0)?;
//! let lst = SiderealTime::local(&site, &time)?;
//!
//! let pointing = HorizontalPosition::from_degrees(30.0, 120.0)?;
//! let equatorial = pointing.to_equatorial(&site, lst)?;
//! let galactic = equatorial.to_galactic()?;
//! # let _ = galactic;
//! # Ok(())
//! # }
//! ```

pub(crate) mod constants;
pub mod errors;
pub mod frames;

pub use errors::{CoordError, CoordResult};
pub use frames::{EquatorialPosition, GalacticPosition, HorizontalPosition};
