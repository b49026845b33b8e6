//! Error types used by the crate.

use roofline_types::error::RooflineTypesError;
use thiserror::Error;

/// Roofline error type.
///
/// These errors mean that the input handed to the crate is structurally invalid, which is a bug of the component
/// that produced it. Problems with the measured data itself are reported through
/// [`ValidationResult`](crate::ValidationResult) instead.
#[derive(Debug, Error)]
pub enum RooflineError {
    /// Invalid geometry: a coordinate out of range or a geometry that is not a ring.
    #[error(transparent)]
    Types(#[from] RooflineTypesError),
    /// Input value that cannot be used for measurement.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Failed to parse a JSON document.
    #[error("failed to parse input: {0}")]
    Json(#[from] serde_json::Error),
}
