use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Identifier of a validation check.
///
/// Checks are always evaluated and reported in the order of [`CheckId::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    /// First and last perimeter points coincide.
    PerimeterClosed,
    /// Every edge touches another edge.
    SegmentsConnected,
    /// No edge is traced twice.
    NoOverlappingSegments,
    /// The roof has a ridge.
    RidgeIsHighest,
    /// Every facet is a proper polygon.
    ValidFacetPolygons,
    /// Facets add up to the total area.
    FacetsCoverPerimeter,
    /// Neither the perimeter nor any facet crosses itself.
    NoSelfIntersection,
    /// Facet area sum matches the total area.
    AreaSumMatch,
    /// Total area matches the ground truth.
    AreaGroundTruth,
    /// Total area is plausible for a roof.
    ReasonableArea,
    /// Edge lengths add up to the declared linear totals.
    LinearSumMatch,
    /// Eaves and rakes add up to the perimeter.
    EaveRakePerimeter,
    /// Declared linear totals match the ground truth.
    LinearGroundTruth,
    /// Pitch is in the valid range.
    ValidPitch,
    /// Facet pitches are similar.
    FacetPitchConsistency,
}

impl CheckId {
    /// All checks in evaluation order.
    pub const ALL: [CheckId; 15] = [
        CheckId::PerimeterClosed,
        CheckId::SegmentsConnected,
        CheckId::NoOverlappingSegments,
        CheckId::RidgeIsHighest,
        CheckId::ValidFacetPolygons,
        CheckId::FacetsCoverPerimeter,
        CheckId::NoSelfIntersection,
        CheckId::AreaSumMatch,
        CheckId::AreaGroundTruth,
        CheckId::ReasonableArea,
        CheckId::LinearSumMatch,
        CheckId::EaveRakePerimeter,
        CheckId::LinearGroundTruth,
        CheckId::ValidPitch,
        CheckId::FacetPitchConsistency,
    ];

    /// Serialized identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckId::PerimeterClosed => "perimeter_closed",
            CheckId::SegmentsConnected => "segments_connected",
            CheckId::NoOverlappingSegments => "no_overlapping_segments",
            CheckId::RidgeIsHighest => "ridge_is_highest",
            CheckId::ValidFacetPolygons => "valid_facet_polygons",
            CheckId::FacetsCoverPerimeter => "facets_cover_perimeter",
            CheckId::NoSelfIntersection => "no_self_intersection",
            CheckId::AreaSumMatch => "area_sum_match",
            CheckId::AreaGroundTruth => "area_ground_truth",
            CheckId::ReasonableArea => "reasonable_area",
            CheckId::LinearSumMatch => "linear_sum_match",
            CheckId::EaveRakePerimeter => "eave_rake_perimeter",
            CheckId::LinearGroundTruth => "linear_ground_truth",
            CheckId::ValidPitch => "valid_pitch",
            CheckId::FacetPitchConsistency => "facet_pitch_consistency",
        }
    }

    /// Human readable name.
    pub fn name(&self) -> &'static str {
        match self {
            CheckId::PerimeterClosed => "Perimeter closed",
            CheckId::SegmentsConnected => "Segments connected",
            CheckId::NoOverlappingSegments => "No overlapping segments",
            CheckId::RidgeIsHighest => "Ridge is highest",
            CheckId::ValidFacetPolygons => "Valid facet polygons",
            CheckId::FacetsCoverPerimeter => "Facets cover perimeter",
            CheckId::NoSelfIntersection => "No self-intersection",
            CheckId::AreaSumMatch => "Area sum matches total",
            CheckId::AreaGroundTruth => "Area vs. ground truth",
            CheckId::ReasonableArea => "Reasonable area",
            CheckId::LinearSumMatch => "Linear sum matches total",
            CheckId::EaveRakePerimeter => "Eave + rake matches perimeter",
            CheckId::LinearGroundTruth => "Linear vs. ground truth",
            CheckId::ValidPitch => "Valid pitch range",
            CheckId::FacetPitchConsistency => "Facet pitch consistency",
        }
    }

    /// Category of the check.
    pub fn category(&self) -> CheckCategory {
        match self {
            CheckId::PerimeterClosed
            | CheckId::SegmentsConnected
            | CheckId::NoOverlappingSegments
            | CheckId::RidgeIsHighest => CheckCategory::Topology,
            CheckId::ValidFacetPolygons
            | CheckId::FacetsCoverPerimeter
            | CheckId::NoSelfIntersection => CheckCategory::Geometry,
            CheckId::AreaSumMatch | CheckId::AreaGroundTruth | CheckId::ReasonableArea => {
                CheckCategory::Area
            }
            CheckId::LinearSumMatch | CheckId::EaveRakePerimeter | CheckId::LinearGroundTruth => {
                CheckCategory::Linear
            }
            CheckId::ValidPitch | CheckId::FacetPitchConsistency => CheckCategory::Pitch,
        }
    }

    /// Critical checks fail and block delivery. Other checks only produce warnings.
    pub fn is_critical(&self) -> bool {
        !matches!(
            self,
            CheckId::RidgeIsHighest
                | CheckId::ReasonableArea
                | CheckId::LinearSumMatch
                | CheckId::EaveRakePerimeter
                | CheckId::FacetPitchConsistency
        )
    }

    /// Code of the issue reported when the check does not pass.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            CheckId::PerimeterClosed => ErrorCode::PerimeterNotClosed,
            CheckId::SegmentsConnected => ErrorCode::SegmentsDisconnected,
            CheckId::NoOverlappingSegments => ErrorCode::OverlappingSegments,
            CheckId::RidgeIsHighest => ErrorCode::NoRidgeDetected,
            CheckId::ValidFacetPolygons => ErrorCode::InvalidFacetPolygon,
            CheckId::FacetsCoverPerimeter => ErrorCode::FacetCoverageMismatch,
            CheckId::NoSelfIntersection => ErrorCode::SelfIntersection,
            CheckId::AreaSumMatch => ErrorCode::AreaSumMismatch,
            CheckId::AreaGroundTruth => ErrorCode::AreaAccuracyFailed,
            CheckId::ReasonableArea => ErrorCode::AreaOutOfRange,
            CheckId::LinearSumMatch => ErrorCode::LinearSumMismatch,
            CheckId::EaveRakePerimeter => ErrorCode::PerimeterLinearMismatch,
            CheckId::LinearGroundTruth => ErrorCode::LinearAccuracyFailed,
            CheckId::ValidPitch => ErrorCode::InvalidPitch,
            CheckId::FacetPitchConsistency => ErrorCode::PitchInconsistent,
        }
    }

    /// Severity of the issue reported when the check does not pass.
    pub fn failure_severity(&self) -> Severity {
        match self {
            CheckId::PerimeterClosed
            | CheckId::SegmentsConnected
            | CheckId::ValidFacetPolygons
            | CheckId::NoSelfIntersection
            | CheckId::AreaGroundTruth
            | CheckId::LinearGroundTruth => Severity::Critical,
            CheckId::NoOverlappingSegments
            | CheckId::FacetsCoverPerimeter
            | CheckId::AreaSumMatch
            | CheckId::ValidPitch => Severity::High,
            CheckId::RidgeIsHighest
            | CheckId::ReasonableArea
            | CheckId::LinearSumMatch
            | CheckId::EaveRakePerimeter
            | CheckId::FacetPitchConsistency => Severity::Warning,
        }
    }
}

impl Display for CheckId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group of related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    /// Connectivity of the perimeter and the edges.
    Topology,
    /// Shape of the facets.
    Geometry,
    /// Area totals.
    Area,
    /// Linear totals.
    Linear,
    /// Roof pitch.
    Pitch,
    /// Agreement between independent values.
    Consistency,
}

/// Outcome of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The data satisfies the check.
    Passed,
    /// A critical check is not satisfied.
    Failed,
    /// A non-critical check is not satisfied.
    Warning,
    /// The check has nothing to verify, e.g. no ground truth was given.
    Skipped,
}

/// Severity of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks delivery. Cannot be overridden.
    Critical,
    /// Blocks delivery unless overridden by a reviewer.
    High,
    /// Does not block delivery.
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Warning => "warning",
        })
    }
}

/// Machine readable code of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorCode {
    PerimeterNotClosed,
    SegmentsDisconnected,
    OverlappingSegments,
    NoRidgeDetected,
    InvalidFacetPolygon,
    FacetCoverageMismatch,
    SelfIntersection,
    AreaSumMismatch,
    AreaAccuracyFailed,
    AreaOutOfRange,
    LinearSumMismatch,
    PerimeterLinearMismatch,
    LinearAccuracyFailed,
    InvalidPitch,
    PitchInconsistent,
}

impl ErrorCode {
    /// Serialized code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::PerimeterNotClosed => "PERIMETER_NOT_CLOSED",
            ErrorCode::SegmentsDisconnected => "SEGMENTS_DISCONNECTED",
            ErrorCode::OverlappingSegments => "OVERLAPPING_SEGMENTS",
            ErrorCode::NoRidgeDetected => "NO_RIDGE_DETECTED",
            ErrorCode::InvalidFacetPolygon => "INVALID_FACET_POLYGON",
            ErrorCode::FacetCoverageMismatch => "FACET_COVERAGE_MISMATCH",
            ErrorCode::SelfIntersection => "SELF_INTERSECTION",
            ErrorCode::AreaSumMismatch => "AREA_SUM_MISMATCH",
            ErrorCode::AreaAccuracyFailed => "AREA_ACCURACY_FAILED",
            ErrorCode::AreaOutOfRange => "AREA_OUT_OF_RANGE",
            ErrorCode::LinearSumMismatch => "LINEAR_SUM_MISMATCH",
            ErrorCode::PerimeterLinearMismatch => "PERIMETER_LINEAR_MISMATCH",
            ErrorCode::LinearAccuracyFailed => "LINEAR_ACCURACY_FAILED",
            ErrorCode::InvalidPitch => "INVALID_PITCH",
            ErrorCode::PitchInconsistent => "PITCH_INCONSISTENT",
        }
    }

    /// What a reviewer should do to resolve the issue.
    pub fn suggested_fix(&self) -> &'static str {
        match self {
            ErrorCode::PerimeterNotClosed => {
                "Snap the last perimeter vertex to the first one so the outline forms a closed ring."
            }
            ErrorCode::SegmentsDisconnected => {
                "Extend or snap dangling edges so every edge meets another edge at its endpoints."
            }
            ErrorCode::OverlappingSegments => "Remove edges that were traced more than once.",
            ErrorCode::NoRidgeDetected => {
                "Confirm the roof is flat or trace the missing ridge lines."
            }
            ErrorCode::InvalidFacetPolygon => {
                "Redraw facets that have fewer than 3 vertices or no area."
            }
            ErrorCode::FacetCoverageMismatch => {
                "Add missing facets or remove duplicated ones so they cover the whole roof."
            }
            ErrorCode::SelfIntersection => {
                "Reorder the vertices of crossing outlines so no side crosses another."
            }
            ErrorCode::AreaSumMismatch => {
                "Recalculate the total area from the facets or correct the facet outlines."
            }
            ErrorCode::AreaAccuracyFailed => {
                "Compare the traced outline with the reference measurement and retrace the roof."
            }
            ErrorCode::AreaOutOfRange => {
                "Check that the right building was traced and the outline units are correct."
            }
            ErrorCode::LinearSumMismatch => {
                "Recalculate the linear totals from the traced edges."
            }
            ErrorCode::PerimeterLinearMismatch => {
                "Trace missing eaves or rakes, or fix edges that are miscategorized."
            }
            ErrorCode::LinearAccuracyFailed => {
                "Compare the traced edges with the reference measurement and retrace them."
            }
            ErrorCode::InvalidPitch => "Enter a pitch between flat and 24/12.",
            ErrorCode::PitchInconsistent => {
                "Verify the pitch of every facet; the roof may have sections of different slope."
            }
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one validation check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationCheck {
    id: CheckId,
    name: String,
    category: CheckCategory,
    status: CheckStatus,
    is_critical: bool,
    details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    threshold: Option<f64>,
}

impl ValidationCheck {
    fn new(id: CheckId, status: CheckStatus, details: impl Into<String>) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            category: id.category(),
            status,
            is_critical: id.is_critical(),
            details: details.into(),
            value: None,
            threshold: None,
        }
    }

    pub(crate) fn passed(id: CheckId, details: impl Into<String>) -> Self {
        Self::new(id, CheckStatus::Passed, details)
    }

    /// The data does not satisfy the check: critical checks fail, others produce a warning.
    pub(crate) fn violated(id: CheckId, details: impl Into<String>) -> Self {
        let status = if id.is_critical() {
            CheckStatus::Failed
        } else {
            CheckStatus::Warning
        };
        Self::new(id, status, details)
    }

    pub(crate) fn skipped(id: CheckId, details: impl Into<String>) -> Self {
        Self::new(id, CheckStatus::Skipped, details)
    }

    pub(crate) fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub(crate) fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Identifier of the check.
    pub fn id(&self) -> CheckId {
        self.id
    }

    /// Human readable name of the check.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category of the check.
    pub fn category(&self) -> CheckCategory {
        self.category
    }

    /// Outcome of the check.
    pub fn status(&self) -> CheckStatus {
        self.status
    }

    /// Whether the check is critical.
    pub fn is_critical(&self) -> bool {
        self.is_critical
    }

    /// Description of the outcome.
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Measured value the check compared, if any.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Threshold the value was compared with, if any.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    pub(crate) fn issue(&self) -> Option<ValidationIssue> {
        let severity = match self.status {
            CheckStatus::Failed => self.id.failure_severity(),
            CheckStatus::Warning => Severity::Warning,
            CheckStatus::Passed | CheckStatus::Skipped => return None,
        };

        Some(ValidationIssue {
            code: self.id.error_code(),
            check: self.id,
            severity,
            message: self.details.clone(),
        })
    }
}

/// Problem found by validation: a blocking error or a warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// Code of the issue.
    pub code: ErrorCode,
    /// Check that reported the issue.
    pub check: CheckId,
    /// Severity of the issue.
    pub severity: Severity,
    /// Description of the issue.
    pub message: String,
}

impl ValidationIssue {
    /// What a reviewer should do to resolve the issue.
    pub fn suggested_fix(&self) -> &'static str {
        self.code.suggested_fix()
    }
}
