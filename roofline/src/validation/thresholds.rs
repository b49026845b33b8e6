use serde::{Deserialize, Serialize};

/// Default maximum distance between the first and the last perimeter points.
pub const DEFAULT_CLOSURE_TOLERANCE_FT: f64 = 1.0;
/// Default maximum distance between endpoints of connected edges.
pub const DEFAULT_CONNECTIVITY_RADIUS_FT: f64 = 3.0;
/// Default fraction of the average length below which edge midpoints are considered coincident.
pub const DEFAULT_OVERLAP_MIDPOINT_RATIO: f64 = 0.30;
/// Default length difference below which two edges with close midpoints are considered the same edge.
pub const DEFAULT_OVERLAP_LENGTH_DELTA_FT: f64 = 5.0;
/// Default lower bound of facet area sum to total area ratio.
pub const DEFAULT_MIN_COVERAGE_RATIO: f64 = 0.98;
/// Default upper bound of facet area sum to total area ratio.
pub const DEFAULT_MAX_COVERAGE_RATIO: f64 = 1.02;
/// Default relative tolerance of area comparisons.
pub const DEFAULT_AREA_TOLERANCE: f64 = 0.01;
/// Default relative tolerance of linear total comparisons.
pub const DEFAULT_LINEAR_TOLERANCE: f64 = 0.05;
/// Default relative tolerance between eaves plus rakes and the perimeter.
pub const DEFAULT_PERIMETER_TOLERANCE: f64 = 0.05;
/// Default absolute tolerance of linear totals against ground truth.
pub const DEFAULT_GROUND_TRUTH_LINEAR_TOLERANCE_FT: f64 = 1.0;
/// Default smallest plausible roof area.
pub const DEFAULT_MIN_REASONABLE_AREA_SQFT: f64 = 500.0;
/// Default largest plausible roof area.
pub const DEFAULT_MAX_REASONABLE_AREA_SQFT: f64 = 50_000.0;
/// Default steepest accepted pitch rise (per 12 of run).
pub const DEFAULT_MAX_PITCH_RISE: f64 = 24.0;
/// Default largest accepted difference between facet pitch rises.
pub const DEFAULT_MAX_PITCH_SPREAD: f64 = 4.0;

/// Tolerances and limits used by validation checks.
///
/// The defaults are tuned on delivered measurements. They can be overridden either in code:
///
/// ```
/// use roofline::{ValidationPipeline, ValidationThresholds};
///
/// let thresholds = ValidationThresholds::default()
///     .with_area_tolerance(0.02)
///     .with_reasonable_area(200.0, 80_000.0);
/// let pipeline = ValidationPipeline::with_thresholds(thresholds);
/// ```
///
/// or loaded from a JSON document, where missing fields keep their default values:
///
/// ```
/// use roofline::ValidationThresholds;
///
/// let thresholds: ValidationThresholds = serde_json::from_str(r#"{"maxPitchRise": 18}"#).unwrap();
/// assert_eq!(thresholds.max_pitch_rise, 18.0);
/// assert_eq!(thresholds.closure_tolerance_ft, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationThresholds {
    /// The perimeter is closed if its first and last points are closer than this.
    pub closure_tolerance_ft: f64,
    /// Edges are connected if any of their endpoints are within this distance.
    pub connectivity_radius_ft: f64,
    /// See [`EdgeSegment::overlaps`](crate::EdgeSegment::overlaps).
    pub overlap_midpoint_ratio: f64,
    /// See [`EdgeSegment::overlaps`](crate::EdgeSegment::overlaps).
    pub overlap_length_delta_ft: f64,
    /// Lowest accepted ratio of the facet area sum to the total area.
    pub min_coverage_ratio: f64,
    /// Highest accepted ratio of the facet area sum to the total area.
    pub max_coverage_ratio: f64,
    /// Accepted relative difference between the facet area sum and the total area.
    pub area_tolerance: f64,
    /// Accepted relative difference between the total area and the ground truth area.
    pub ground_truth_area_tolerance: f64,
    /// Accepted relative difference between the edge lengths and the declared linear totals.
    pub linear_tolerance: f64,
    /// Accepted relative difference between eaves plus rakes and the perimeter length.
    pub perimeter_tolerance: f64,
    /// Accepted absolute difference between a declared linear total and its ground truth.
    pub ground_truth_linear_tolerance_ft: f64,
    /// Smallest total area that does not raise a warning.
    pub min_reasonable_area_sqft: f64,
    /// Largest total area that does not raise a warning.
    pub max_reasonable_area_sqft: f64,
    /// Steepest valid pitch rise.
    pub max_pitch_rise: f64,
    /// Largest difference between facet pitch rises that does not raise a warning.
    pub max_pitch_spread: f64,
}

impl Default for ValidationThresholds {
    fn default() -> Self {
        Self {
            closure_tolerance_ft: DEFAULT_CLOSURE_TOLERANCE_FT,
            connectivity_radius_ft: DEFAULT_CONNECTIVITY_RADIUS_FT,
            overlap_midpoint_ratio: DEFAULT_OVERLAP_MIDPOINT_RATIO,
            overlap_length_delta_ft: DEFAULT_OVERLAP_LENGTH_DELTA_FT,
            min_coverage_ratio: DEFAULT_MIN_COVERAGE_RATIO,
            max_coverage_ratio: DEFAULT_MAX_COVERAGE_RATIO,
            area_tolerance: DEFAULT_AREA_TOLERANCE,
            ground_truth_area_tolerance: DEFAULT_AREA_TOLERANCE,
            linear_tolerance: DEFAULT_LINEAR_TOLERANCE,
            perimeter_tolerance: DEFAULT_PERIMETER_TOLERANCE,
            ground_truth_linear_tolerance_ft: DEFAULT_GROUND_TRUTH_LINEAR_TOLERANCE_FT,
            min_reasonable_area_sqft: DEFAULT_MIN_REASONABLE_AREA_SQFT,
            max_reasonable_area_sqft: DEFAULT_MAX_REASONABLE_AREA_SQFT,
            max_pitch_rise: DEFAULT_MAX_PITCH_RISE,
            max_pitch_spread: DEFAULT_MAX_PITCH_SPREAD,
        }
    }
}

impl ValidationThresholds {
    /// Sets the perimeter closure tolerance.
    pub fn with_closure_tolerance(mut self, feet: f64) -> Self {
        self.closure_tolerance_ft = feet;
        self
    }

    /// Sets the edge connectivity radius.
    pub fn with_connectivity_radius(mut self, feet: f64) -> Self {
        self.connectivity_radius_ft = feet;
        self
    }

    /// Sets the parameters of the edge overlap heuristic.
    pub fn with_overlap(mut self, midpoint_ratio: f64, length_delta_ft: f64) -> Self {
        self.overlap_midpoint_ratio = midpoint_ratio;
        self.overlap_length_delta_ft = length_delta_ft;
        self
    }

    /// Sets the accepted range of the facet coverage ratio.
    pub fn with_coverage_ratio(mut self, min: f64, max: f64) -> Self {
        self.min_coverage_ratio = min;
        self.max_coverage_ratio = max;
        self
    }

    /// Sets the relative tolerance of the facet area sum.
    pub fn with_area_tolerance(mut self, tolerance: f64) -> Self {
        self.area_tolerance = tolerance;
        self
    }

    /// Sets the relative tolerance of the area ground truth comparison.
    pub fn with_ground_truth_area_tolerance(mut self, tolerance: f64) -> Self {
        self.ground_truth_area_tolerance = tolerance;
        self
    }

    /// Sets the relative tolerance of the linear totals.
    pub fn with_linear_tolerance(mut self, tolerance: f64) -> Self {
        self.linear_tolerance = tolerance;
        self
    }

    /// Sets the relative tolerance of eaves plus rakes against the perimeter.
    pub fn with_perimeter_tolerance(mut self, tolerance: f64) -> Self {
        self.perimeter_tolerance = tolerance;
        self
    }

    /// Sets the absolute tolerance of the linear ground truth comparison.
    pub fn with_ground_truth_linear_tolerance(mut self, feet: f64) -> Self {
        self.ground_truth_linear_tolerance_ft = feet;
        self
    }

    /// Sets the range of plausible roof areas.
    pub fn with_reasonable_area(mut self, min_sqft: f64, max_sqft: f64) -> Self {
        self.min_reasonable_area_sqft = min_sqft;
        self.max_reasonable_area_sqft = max_sqft;
        self
    }

    /// Sets the steepest valid pitch rise.
    pub fn with_max_pitch_rise(mut self, rise: f64) -> Self {
        self.max_pitch_rise = rise;
        self
    }

    /// Sets the largest accepted spread of facet pitch rises.
    pub fn with_max_pitch_spread(mut self, spread: f64) -> Self {
        self.max_pitch_spread = spread;
        self
    }
}
