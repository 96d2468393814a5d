//! Time machinery for the pointing pipeline.
//!
//! Everything between a civil timestamp string and the sidereal angle the
//! coordinate conversion consumes lives here:
//!
//! 1. [`parse_timestamp`] turns `YYYY-MM-DD HH:MM:SS` text into a validated
//!    [`CalendarTime`] (UTC by contract; no timezone machinery exists).
//! 2. [`JulianDay::from_calendar`] converts it to a continuous day count.
//! 3. [`Gmst`] evaluates the Greenwich sidereal polynomial, and
//!    [`SiderealTime`] offsets it by the observer's east longitude.
//!
//! The sidereal value is carried unreduced (it can be negative for western
//! sites, or exceed 360°); see [`SiderealTime`] for why.

pub mod calendar;
pub mod errors;
pub mod julian;
pub mod parsing;
pub mod sidereal;

pub use calendar::CalendarTime;
pub use errors::{TimeError, TimeResult};
pub use julian::JulianDay;
pub use parsing::parse_timestamp;
pub use sidereal::{Gmst, SiderealTime};
