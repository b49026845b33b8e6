use roofline_types::geo::GeoClosedContour;

use crate::measurement::MeasurementSet;
use crate::validation::{CheckId, ValidationCheck, ValidationThresholds};

pub(super) fn perimeter_closed(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::PerimeterClosed;
    let vertex_count = set.perimeter.len();
    if vertex_count < 3 {
        return ValidationCheck::violated(
            id,
            format!("Perimeter has {vertex_count} vertices, at least 3 are required"),
        );
    }

    let Some(gap) = set.perimeter.closure_gap_ft() else {
        return ValidationCheck::violated(id, "Perimeter is empty");
    };

    let check = if gap < thresholds.closure_tolerance_ft {
        ValidationCheck::passed(id, format!("Perimeter closure gap is {gap:.2} ft"))
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Perimeter is not closed: gap of {gap:.2} ft between the first and last vertices"
            ),
        )
    };

    check
        .with_value(gap)
        .with_threshold(thresholds.closure_tolerance_ft)
}

pub(super) fn segments_connected(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::SegmentsConnected;
    let segments = &set.linear_features;
    if segments.is_empty() {
        return ValidationCheck::skipped(id, "No linear features to check");
    }

    let disconnected = segments
        .iter()
        .enumerate()
        .filter(|(i, segment)| {
            !segments.iter().enumerate().any(|(j, other)| {
                *i != j && segment.is_connected_to(other, thresholds.connectivity_radius_ft)
            })
        })
        .count();

    let check = if disconnected == 0 {
        ValidationCheck::passed(
            id,
            format!("All {} linear features are connected", segments.len()),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "{disconnected} of {} linear features have no endpoint within {} ft of another feature",
                segments.len(),
                thresholds.connectivity_radius_ft
            ),
        )
    };

    check
        .with_value(disconnected as f64)
        .with_threshold(thresholds.connectivity_radius_ft)
}

pub(super) fn no_overlapping_segments(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::NoOverlappingSegments;
    let segments = &set.linear_features;

    let mut overlapping = 0usize;
    for (i, segment) in segments.iter().enumerate() {
        for other in &segments[i + 1..] {
            if segment.overlaps(other, thresholds) {
                log::trace!(
                    "Overlapping {} and {} segments of {:.1} and {:.1} ft",
                    segment.edge_type(),
                    other.edge_type(),
                    segment.length_ft(),
                    other.length_ft()
                );
                overlapping += 1;
            }
        }
    }

    let check = if overlapping == 0 {
        ValidationCheck::passed(id, "No overlapping linear features")
    } else {
        ValidationCheck::violated(
            id,
            format!("{overlapping} pairs of linear features overlap"),
        )
    };

    check.with_value(overlapping as f64).with_threshold(0.0)
}

pub(super) fn ridge_is_highest(set: &MeasurementSet) -> ValidationCheck {
    let id = CheckId::RidgeIsHighest;
    if set.ridge_total > 0.0 {
        ValidationCheck::passed(id, format!("Ridge length is {:.1} ft", set.ridge_total))
            .with_value(set.ridge_total)
    } else {
        ValidationCheck::violated(id, "No ridge detected, the roof may be flat or simple")
            .with_value(set.ridge_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{at, edge, gable};
    use crate::validation::CheckStatus;
    use crate::{EdgeType, Polygon};

    #[test]
    fn perimeter_closure() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(
            perimeter_closed(&set, &thresholds).status(),
            CheckStatus::Passed
        );

        set.perimeter = Polygon::new(vec![
            at(0.0, 0.0),
            at(40.0, 0.0),
            at(40.0, 30.0),
            at(0.0, 30.0),
            at(0.0, 2.0),
        ]);
        let check = perimeter_closed(&set, &thresholds);
        assert_eq!(check.status(), CheckStatus::Failed);
        assert!(check.value().unwrap() > 1.9);

        set.perimeter = Polygon::new(vec![at(0.0, 0.0), at(0.0, 0.0)]);
        assert_eq!(
            perimeter_closed(&set, &thresholds).status(),
            CheckStatus::Failed
        );
    }

    #[test]
    fn connectivity() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(
            segments_connected(&set, &thresholds).status(),
            CheckStatus::Passed
        );

        set.linear_features
            .push(edge(EdgeType::Valley, (100.0, 100.0), (110.0, 110.0)));
        let check = segments_connected(&set, &thresholds);
        assert_eq!(check.status(), CheckStatus::Failed);
        assert_eq!(check.value(), Some(1.0));

        set.linear_features.clear();
        assert_eq!(
            segments_connected(&set, &thresholds).status(),
            CheckStatus::Skipped
        );
    }

    #[test]
    fn overlapping_features() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(
            no_overlapping_segments(&set, &thresholds).status(),
            CheckStatus::Passed
        );

        set.linear_features
            .push(edge(EdgeType::Ridge, (1.0, 15.5), (39.0, 15.5)));
        let check = no_overlapping_segments(&set, &thresholds);
        assert_eq!(check.status(), CheckStatus::Failed);
        assert_eq!(check.value(), Some(1.0));
    }

    #[test]
    fn missing_ridge_is_a_warning() {
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(ridge_is_highest(&set).status(), CheckStatus::Passed);

        set.ridge_total = 0.0;
        assert_eq!(ridge_is_highest(&set).status(), CheckStatus::Warning);
    }
}
