use serde::{Deserialize, Serialize};

use crate::validation::{
    CheckId, CheckStatus, ErrorCode, Severity, ValidationCheck, ValidationIssue,
};

/// Verdict of a measurement set validation.
///
/// * Every failed check produces a blocking error. The measurement set is valid only if there are no blocking
///   errors.
/// * Every check that ended with a warning produces a warning issue.
/// * The overall score is the share of passed checks among the checks that were not skipped, in percent with one
///   decimal place.
/// * A human override is offered only if the measurement set is invalid and none of the blocking errors is of
///   [`Severity::Critical`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    overall_score: f64,
    critical_checks_passed: bool,
    checks: Vec<ValidationCheck>,
    blocking_errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
    requires_human_override: bool,
    override_justification_required: bool,
}

impl ValidationResult {
    /// Aggregates the results of individual checks. The checks are kept in the given order.
    pub fn from_checks(checks: Vec<ValidationCheck>) -> Self {
        let mut blocking_errors = Vec::new();
        let mut warnings = Vec::new();
        for issue in checks.iter().filter_map(ValidationCheck::issue) {
            if issue.severity == Severity::Warning {
                warnings.push(issue);
            } else {
                blocking_errors.push(issue);
            }
        }

        let evaluated = checks
            .iter()
            .filter(|check| check.status() != CheckStatus::Skipped)
            .count();
        let passed = checks
            .iter()
            .filter(|check| check.status() == CheckStatus::Passed)
            .count();
        let overall_score = if evaluated == 0 {
            0.0
        } else {
            (passed as f64 / evaluated as f64 * 1000.0).round() / 10.0
        };

        let critical_checks_passed = checks
            .iter()
            .filter(|check| check.is_critical())
            .all(|check| check.status() != CheckStatus::Failed);

        let is_valid = blocking_errors.is_empty();
        let requires_human_override = !is_valid
            && blocking_errors
                .iter()
                .all(|issue| issue.severity != Severity::Critical);

        Self {
            is_valid,
            overall_score,
            critical_checks_passed,
            checks,
            blocking_errors,
            warnings,
            requires_human_override,
            override_justification_required: requires_human_override,
        }
    }

    /// True if there are no blocking errors and the measurements can be delivered.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Share of passed checks among the evaluated ones, from 0 to 100.
    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    /// True if no critical check failed.
    pub fn critical_checks_passed(&self) -> bool {
        self.critical_checks_passed
    }

    /// All checks in evaluation order.
    pub fn checks(&self) -> &[ValidationCheck] {
        &self.checks
    }

    /// Result of the check with the given id.
    pub fn check(&self, id: CheckId) -> Option<&ValidationCheck> {
        self.checks.iter().find(|check| check.id() == id)
    }

    /// Issues that prevent delivery.
    pub fn blocking_errors(&self) -> &[ValidationIssue] {
        &self.blocking_errors
    }

    /// Issues that do not prevent delivery.
    pub fn warnings(&self) -> &[ValidationIssue] {
        &self.warnings
    }

    /// True if the set may still be delivered after a reviewer overrides the blocking errors.
    pub fn requires_human_override(&self) -> bool {
        self.requires_human_override
    }

    /// True if an override must be justified by the reviewer.
    pub fn override_justification_required(&self) -> bool {
        self.override_justification_required
    }

    /// Returns true if a blocking error with the given code was reported.
    pub fn has_blocking_error(&self, code: ErrorCode) -> bool {
        self.blocking_errors.iter().any(|issue| issue.code == code)
    }

    /// Number of passed checks.
    pub fn passed_count(&self) -> usize {
        self.count(CheckStatus::Passed)
    }

    /// Number of failed checks.
    pub fn failed_count(&self) -> usize {
        self.count(CheckStatus::Failed)
    }

    /// Number of checks that ended with a warning.
    pub fn warning_count(&self) -> usize {
        self.count(CheckStatus::Warning)
    }

    /// Number of skipped checks.
    pub fn skipped_count(&self) -> usize {
        self.count(CheckStatus::Skipped)
    }

    fn count(&self, status: CheckStatus) -> usize {
        self.checks
            .iter()
            .filter(|check| check.status() == status)
            .count()
    }
}
