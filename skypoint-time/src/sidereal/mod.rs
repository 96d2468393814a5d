//! Sidereal time: Greenwich and local.

mod gmst;
mod lst;

pub use gmst::Gmst;
pub use lst::SiderealTime;
