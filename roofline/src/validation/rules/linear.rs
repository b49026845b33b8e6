use roofline_types::geo::GeoClosedContour;

use super::relative_difference;
use crate::edge::EdgeType;
use crate::measurement::MeasurementSet;
use crate::validation::{CheckId, ValidationCheck, ValidationThresholds};

pub(super) fn linear_sum_match(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::LinearSumMatch;
    let traced = set.linear_totals().total();
    let declared = set.declared_linear_total();

    let difference = if declared == 0.0 {
        Some(0.0)
    } else {
        relative_difference(traced, declared)
    };
    let Some(difference) = difference else {
        return ValidationCheck::violated(
            id,
            format!("Declared linear total {declared} is not a valid length"),
        );
    };

    let check = if difference <= thresholds.linear_tolerance {
        ValidationCheck::passed(
            id,
            format!(
                "Traced features add up to {traced:.1} ft, within {:.2}% of the declared totals",
                difference * 100.0
            ),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Traced features add up to {traced:.1} ft but the declared totals are {declared:.1} ft ({:.2}% off)",
                difference * 100.0
            ),
        )
    };

    check
        .with_value(difference)
        .with_threshold(thresholds.linear_tolerance)
}

pub(super) fn eave_rake_perimeter(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::EaveRakePerimeter;
    let perimeter = set.perimeter.perimeter_ft();
    let eaves_and_rakes = set.eave_total + set.rake_total;

    let Some(difference) = relative_difference(eaves_and_rakes, perimeter) else {
        return ValidationCheck::skipped(id, "Perimeter length is not available");
    };

    let check = if difference <= thresholds.perimeter_tolerance {
        ValidationCheck::passed(
            id,
            format!(
                "Eaves and rakes ({eaves_and_rakes:.1} ft) match the perimeter ({perimeter:.1} ft)"
            ),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Eaves and rakes ({eaves_and_rakes:.1} ft) differ from the perimeter ({perimeter:.1} ft) by {:.2}%",
                difference * 100.0
            ),
        )
    };

    check
        .with_value(difference)
        .with_threshold(thresholds.perimeter_tolerance)
}

pub(super) fn linear_ground_truth(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::LinearGroundTruth;
    let Some(ground_truth) = set.ground_truth.as_ref().filter(|gt| gt.has_linear()) else {
        return ValidationCheck::skipped(id, "No ground truth linear measurements provided");
    };

    let tolerance = thresholds.ground_truth_linear_tolerance_ft;
    let mut max_deviation = 0.0f64;
    let mut mismatched: Vec<String> = Vec::new();
    for (edge_type, reference) in ground_truth.linear_entries() {
        let measured = set.declared_total(edge_type);
        let deviation = (measured - reference).abs();
        max_deviation = max_deviation.max(deviation);
        if deviation.is_nan() || deviation > tolerance {
            mismatched.push(format_mismatch(edge_type, measured, reference));
        }
    }

    let check = if mismatched.is_empty() {
        ValidationCheck::passed(
            id,
            format!("All linear totals are within {tolerance} ft of the ground truth"),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Linear totals deviate from the ground truth by more than {tolerance} ft: {}",
                mismatched.join("; ")
            ),
        )
    };

    check.with_value(max_deviation).with_threshold(tolerance)
}

fn format_mismatch(edge_type: EdgeType, measured: f64, reference: f64) -> String {
    format!("{edge_type} {measured:.1} ft vs {reference:.1} ft")
}
