//! The three coordinate frames of the pipeline.

mod equatorial;
mod galactic;
mod horizontal;

pub use equatorial::EquatorialPosition;
pub use galactic::GalacticPosition;
pub use horizontal::HorizontalPosition;
