mod core;
mod normalize;
#[cfg(feature = "serde")]
mod serde_;
mod validate;

pub use core::Angle;
pub use normalize::{wrap_0_2pi, wrap_0_360, wrap_pm_pi};
