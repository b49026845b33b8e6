//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
///
/// Errors are only produced at the input boundary, when a value handed to the crate is not a well-formed
/// coordinate or ring. Degenerate geometry (too few vertices, zero area) is never an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RooflineTypesError {
    /// Latitude or longitude is not finite or lies outside of the valid range.
    #[error("invalid coordinate: lat {lat}, lng {lng}")]
    InvalidCoordinate {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
    /// Geometry conversion error.
    #[error("invalid input geometry: {0}")]
    Conversion(String),
    /// Geometry type that cannot be represented as a ring.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),
}
