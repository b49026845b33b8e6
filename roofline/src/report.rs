//! Markdown summary of a validation result for reviewers.

use std::fmt::{self, Display, Formatter};

use crate::validation::{ValidationIssue, ValidationResult};

impl ValidationResult {
    /// Renders the result as a Markdown report: status line, blocking errors with suggested fixes, warnings and check
    /// counts.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let status = if self.is_valid() {
            "PASSED"
        } else if self.requires_human_override() {
            "NEEDS REVIEW"
        } else {
            "FAILED"
        };
        writeln!(f, "## Measurement validation: {status}")?;
        writeln!(f)?;
        writeln!(f, "- Overall score: {:.1}%", self.overall_score())?;
        writeln!(
            f,
            "- Critical checks: {}",
            if self.critical_checks_passed() {
                "passed"
            } else {
                "failed"
            }
        )?;
        if self.requires_human_override() {
            writeln!(
                f,
                "- Delivery requires a reviewer override with a written justification"
            )?;
        }

        if !self.blocking_errors().is_empty() {
            writeln!(f)?;
            writeln!(f, "### Blocking errors ({})", self.blocking_errors().len())?;
            writeln!(f)?;
            for issue in self.blocking_errors() {
                write_issue(f, issue)?;
            }
        }

        if !self.warnings().is_empty() {
            writeln!(f)?;
            writeln!(f, "### Warnings ({})", self.warnings().len())?;
            writeln!(f)?;
            for issue in self.warnings() {
                write_issue(f, issue)?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Checks: {} passed, {} failed, {} warnings, {} skipped",
            self.passed_count(),
            self.failed_count(),
            self.warning_count(),
            self.skipped_count()
        )
    }
}

fn write_issue(f: &mut Formatter<'_>, issue: &ValidationIssue) -> fmt::Result {
    writeln!(
        f,
        "- **{}** `{}` ({}): {}",
        issue.severity, issue.code, issue.check, issue.message
    )?;
    writeln!(f, "  - Suggested fix: {}", issue.suggested_fix())
}
