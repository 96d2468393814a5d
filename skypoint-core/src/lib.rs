//! Shared foundations for the skypoint workspace.
//!
//! `skypoint-core` holds the pieces every stage of the pointing pipeline
//! leans on:
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | [`Angle`] type, wrapping, per-role validation |
//! | [`location`] | Observing site (latitude, east longitude) |
//! | [`math`] | `fmod` and guarded inverse trigonometry |
//! | [`constants`] | J2000 epoch, angular constants |
//! | [`errors`] | [`SkyError`] and [`SkyResult`] |
//!
//! Common types are re-exported at the crate root:
//!
//! ```
//! use skypoint_core::{Angle, Location, MathErrorKind, SkyError, SkyResult};
//! ```

pub mod angle;
pub mod constants;
pub mod errors;
pub mod location;
pub mod math;

pub use angle::{wrap_0_2pi, wrap_0_360, wrap_pm_pi, Angle};
pub use errors::{MathErrorKind, SkyError, SkyResult};
pub use location::Location;
