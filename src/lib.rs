//! latlng-path core
//!
//! An ordered path of geographic points (open polyline or closed polygon)
//! with cached per-edge metrics, cumulative distances and "where am I at
//! distance D" queries.

pub mod geodesy;
pub mod list;
pub mod point;
pub mod polyline;
pub mod query;
pub mod traits;

/// Errors raised by structural misuse of a path or by the geodesy provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    #[error("index {index} out of range for path of {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid coordinate ({latitude}, {longitude}): {reason}")]
    InvalidCoordinate {
        latitude: f64,
        longitude: f64,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, PathError>;
