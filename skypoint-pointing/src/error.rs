use thiserror::Error;

/// Pipeline-level error: a thin composition over the lower crates.
#[derive(Debug, Error)]
pub enum Error {
    #[error("site error: {0}")]
    Site(#[from] skypoint_core::SkyError),

    #[error("time error: {0}")]
    Time(#[from] skypoint_time::TimeError),

    #[error("conversion error: {0}")]
    Coord(#[from] skypoint_coords::CoordError),
}

pub type Result<T> = std::result::Result<T, Error>;
