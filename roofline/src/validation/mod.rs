//! Delivery audit of measurement sets.
//!
//! [`ValidationPipeline`] evaluates every check of [`CheckId::ALL`] independently and aggregates them into a
//! [`ValidationResult`]. Tolerances of the checks are configured with [`ValidationThresholds`].

mod check;
mod pipeline;
mod result;
mod rules;
mod thresholds;

pub use check::{
    CheckCategory, CheckId, CheckStatus, ErrorCode, Severity, ValidationCheck, ValidationIssue,
};
pub use pipeline::ValidationPipeline;
pub use result::ValidationResult;
pub use thresholds::*;
