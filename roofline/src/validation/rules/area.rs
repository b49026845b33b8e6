use super::{is_positive, relative_difference};
use crate::measurement::MeasurementSet;
use crate::validation::{CheckId, ValidationCheck, ValidationThresholds};

pub(super) fn area_sum_match(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::AreaSumMatch;
    let facet_sum = set.facet_area_sum();
    let Some(difference) = relative_difference(facet_sum, set.total_area) else {
        return ValidationCheck::violated(
            id,
            format!("Total area {} is not a positive number", set.total_area),
        );
    };

    let check = if difference <= thresholds.area_tolerance {
        ValidationCheck::passed(
            id,
            format!(
                "Facet area sum {facet_sum:.1} sq ft is within {:.2}% of the total area",
                difference * 100.0
            ),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Facet area sum {facet_sum:.1} sq ft differs from the total area {:.1} sq ft by {:.2}%",
                set.total_area,
                difference * 100.0
            ),
        )
    };

    check
        .with_value(difference)
        .with_threshold(thresholds.area_tolerance)
}

pub(super) fn area_ground_truth(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::AreaGroundTruth;
    let Some(reference) = set.ground_truth.as_ref().and_then(|gt| gt.total_area) else {
        return ValidationCheck::skipped(id, "No ground truth area provided");
    };

    let Some(difference) = relative_difference(set.total_area, reference) else {
        return ValidationCheck::violated(
            id,
            format!("Ground truth area {reference} is not a positive number"),
        );
    };

    let check = if difference <= thresholds.ground_truth_area_tolerance {
        ValidationCheck::passed(
            id,
            format!(
                "Total area is within {:.2}% of the ground truth",
                difference * 100.0
            ),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Total area {:.1} sq ft differs from the ground truth {reference:.1} sq ft by {:.2}%",
                set.total_area,
                difference * 100.0
            ),
        )
    };

    check
        .with_value(difference)
        .with_threshold(thresholds.ground_truth_area_tolerance)
}

pub(super) fn reasonable_area(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::ReasonableArea;
    let area = set.total_area;
    let range = thresholds.min_reasonable_area_sqft..=thresholds.max_reasonable_area_sqft;

    let check = if is_positive(area) && range.contains(&area) {
        ValidationCheck::passed(id, format!("Total area {area:.1} sq ft is plausible"))
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Total area {area:.1} sq ft is outside of the usual range of {} to {} sq ft",
                range.start(),
                range.end()
            ),
        )
    };

    check.with_value(area)
}
