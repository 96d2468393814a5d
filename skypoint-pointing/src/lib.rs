//! The composed pointing pipeline: horizontal → equatorial → galactic for
//! one site and instant, plus the `skypoint` CLI binary.

pub mod error;
pub mod solution;

pub use error::{Error, Result};
pub use solution::{PointingSolution, Report};
