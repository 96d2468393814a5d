/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00 UTC).
pub const J2000_JD: f64 = 2451545.0;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const HOURS_PER_DAY: f64 = 24.0;

pub const MINUTES_PER_DAY: f64 = 1440.0;

pub const SECONDS_PER_DAY_F64: f64 = 86_400.0;

/// Degrees of sidereal rotation per hour of the 24h clock.
pub const DEG_PER_HOUR: f64 = 15.0;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

pub const DEGREES_PER_TURN: f64 = 360.0;
