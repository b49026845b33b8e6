//! Evaluation of individual checks.
//!
//! Every rule reads the measurement set and the thresholds only, so the rules can run in any order or in parallel.
//! Rules never fail: missing or degenerate data turns into a violated or skipped check.

mod area;
mod geometry;
mod linear;
mod pitch;
mod topology;

use crate::measurement::MeasurementSet;
use crate::validation::{CheckId, ValidationCheck, ValidationThresholds};

pub(super) fn evaluate(
    id: CheckId,
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    match id {
        CheckId::PerimeterClosed => topology::perimeter_closed(set, thresholds),
        CheckId::SegmentsConnected => topology::segments_connected(set, thresholds),
        CheckId::NoOverlappingSegments => topology::no_overlapping_segments(set, thresholds),
        CheckId::RidgeIsHighest => topology::ridge_is_highest(set),
        CheckId::ValidFacetPolygons => geometry::valid_facet_polygons(set),
        CheckId::FacetsCoverPerimeter => geometry::facets_cover_perimeter(set, thresholds),
        CheckId::NoSelfIntersection => geometry::no_self_intersection(set),
        CheckId::AreaSumMatch => area::area_sum_match(set, thresholds),
        CheckId::AreaGroundTruth => area::area_ground_truth(set, thresholds),
        CheckId::ReasonableArea => area::reasonable_area(set, thresholds),
        CheckId::LinearSumMatch => linear::linear_sum_match(set, thresholds),
        CheckId::EaveRakePerimeter => linear::eave_rake_perimeter(set, thresholds),
        CheckId::LinearGroundTruth => linear::linear_ground_truth(set, thresholds),
        CheckId::ValidPitch => pitch::valid_pitch(set, thresholds),
        CheckId::FacetPitchConsistency => pitch::facet_pitch_consistency(set, thresholds),
    }
}

/// Relative difference of `value` from `reference`, or `None` if the reference is not a positive number.
fn relative_difference(value: f64, reference: f64) -> Option<f64> {
    if is_positive(reference) {
        Some((value - reference).abs() / reference)
    } else {
        None
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
