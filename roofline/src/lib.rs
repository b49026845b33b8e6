//! Roofline turns traced roof geometry into pitch-corrected measurements and decides whether the measurements are
//! trustworthy enough to be delivered.
//!
//! # Measurements
//!
//! Roof geometry arrives as geographic rings and line segments produced by an upstream tracing process:
//!
//! * a [`Facet`] is one planar section of the roof. Its flat (plan view) area and perimeter are computed from its
//!   polygon, and its surface area is the flat area multiplied by the secant of its [`Pitch`].
//! * an [`EdgeSegment`] is a categorized linear feature of the roof (ridge, hip, valley, eave, rake, ...).
//!   [`LinearTotals`] sums their lengths per category.
//!
//! Facets, edge segments, the roof outline and the declared totals are collected into a [`MeasurementSet`]:
//!
//! ```
//! use roofline::{EdgeSegment, EdgeType, Facet, MeasurementSet, Pitch, Polygon};
//! use roofline::roofline_types::latlng;
//!
//! let outline = Polygon::new(vec![
//!     latlng!(39.73920, -104.99030),
//!     latlng!(39.73920, -104.98990),
//!     latlng!(39.73945, -104.98990),
//!     latlng!(39.73945, -104.99030),
//!     latlng!(39.73920, -104.99030),
//! ]);
//! let facet = Facet::new("A", outline.clone(), Pitch::new("6/12"));
//! let eave = EdgeSegment::new(EdgeType::Eave, outline[0], outline[1]);
//!
//! let set = MeasurementSet::assemble(vec![facet], vec![eave], outline, Pitch::new("6/12"));
//! assert!(set.total_area > 0.0);
//! ```
//!
//! # Validation
//!
//! [`ValidationPipeline`] audits a measurement set with a fixed list of independent checks (see [`CheckId`]) and
//! produces a [`ValidationResult`]. Failed critical checks become blocking errors, other findings become warnings.
//! Validation never fails: malformed or missing data degrades individual checks instead. The only errors in this
//! crate ([`RooflineError`]) are raised while reading structurally invalid input.
//!
//! With the `parallel` feature the checks are evaluated on the `rayon` thread pool. The order of the checks in the
//! result is the same either way.

pub mod edge;
pub mod error;
pub mod facet;
pub mod linear;
pub mod measurement;
pub mod pitch;
mod report;
pub mod validation;

#[cfg(test)]
mod tests;

pub use edge::{EdgeSegment, EdgeType};
pub use error::RooflineError;
pub use facet::{Aspect, Facet};
pub use linear::LinearTotals;
pub use measurement::{GroundTruth, MeasurementSet};
pub use pitch::Pitch;
pub use roofline_types;
pub use validation::{
    CheckCategory, CheckId, CheckStatus, ErrorCode, Severity, ValidationCheck, ValidationIssue,
    ValidationPipeline, ValidationResult, ValidationThresholds,
};

use roofline_types::geo::Coordinate;
use roofline_types::Ring;

/// Ring of geographic coordinates describing a roof outline or a facet.
pub type Polygon = Ring<Coordinate>;
