#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::measurement::MeasurementSet;
use crate::validation::{
    rules, CheckId, ValidationCheck, ValidationResult, ValidationThresholds,
};

/// Runs all validation checks against measurement sets.
///
/// The pipeline holds only its thresholds, so a single instance can be shared between threads and used to validate
/// any number of measurement sets.
///
/// ```
/// use roofline::{MeasurementSet, ValidationPipeline};
///
/// let set = MeasurementSet::default();
/// let result = ValidationPipeline::new().validate(&set);
///
/// assert!(!result.is_valid());
/// assert_eq!(result.checks().len(), 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationPipeline {
    thresholds: ValidationThresholds,
}

impl ValidationPipeline {
    /// Creates a pipeline with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline with custom thresholds.
    pub fn with_thresholds(thresholds: ValidationThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds used by the checks.
    pub fn thresholds(&self) -> &ValidationThresholds {
        &self.thresholds
    }

    /// Validates the measurement set.
    ///
    /// Never fails. Every check of [`CheckId::ALL`] is reported exactly once and in that order.
    pub fn validate(&self, set: &MeasurementSet) -> ValidationResult {
        let checks = self.evaluate_all(set);
        for check in &checks {
            log::debug!(
                "Check {} {:?}: {}",
                check.id(),
                check.status(),
                check.details()
            );
        }

        let result = ValidationResult::from_checks(checks);
        if result.is_valid() {
            log::debug!(
                "Measurement set is valid, score {}, {} warnings",
                result.overall_score(),
                result.warnings().len()
            );
        } else {
            log::warn!(
                "Measurement set failed validation with {} blocking errors, score {}, override {}",
                result.blocking_errors().len(),
                result.overall_score(),
                if result.requires_human_override() {
                    "allowed"
                } else {
                    "denied"
                }
            );
        }

        result
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(&self, set: &MeasurementSet) -> Vec<ValidationCheck> {
        CheckId::ALL
            .iter()
            .map(|id| rules::evaluate(*id, set, &self.thresholds))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(&self, set: &MeasurementSet) -> Vec<ValidationCheck> {
        // `collect` on an indexed parallel iterator keeps the order of the source.
        CheckId::ALL
            .par_iter()
            .map(|id| rules::evaluate(*id, set, &self.thresholds))
            .collect()
    }
}
