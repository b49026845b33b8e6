use roofline_types::geo::GeoClosedContour;

use super::is_positive;
use crate::measurement::MeasurementSet;
use crate::validation::{CheckId, ValidationCheck, ValidationThresholds};

pub(super) fn valid_facet_polygons(set: &MeasurementSet) -> ValidationCheck {
    let id = CheckId::ValidFacetPolygons;
    if set.facets.is_empty() {
        return ValidationCheck::violated(id, "Measurement has no facets");
    }

    let invalid: Vec<&str> = set
        .facets
        .iter()
        .filter(|facet| !facet.is_valid())
        .map(|facet| facet.id())
        .collect();

    let check = if invalid.is_empty() {
        ValidationCheck::passed(id, format!("All {} facets are valid", set.facets.len()))
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Facets with fewer than 3 vertices or no area: {}",
                invalid.join(", ")
            ),
        )
    };

    check.with_value(invalid.len() as f64).with_threshold(0.0)
}

pub(super) fn facets_cover_perimeter(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::FacetsCoverPerimeter;
    if !is_positive(set.total_area) {
        return ValidationCheck::violated(
            id,
            format!("Total area {} is not a positive number", set.total_area),
        );
    }

    let coverage = set.facet_area_sum() / set.total_area;
    let check = if (thresholds.min_coverage_ratio..=thresholds.max_coverage_ratio)
        .contains(&coverage)
    {
        ValidationCheck::passed(
            id,
            format!("Facets cover {:.1}% of the total area", coverage * 100.0),
        )
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Facets cover {:.1}% of the total area, expected between {:.0}% and {:.0}%",
                coverage * 100.0,
                thresholds.min_coverage_ratio * 100.0,
                thresholds.max_coverage_ratio * 100.0
            ),
        )
    };

    check
        .with_value(coverage)
        .with_threshold(thresholds.min_coverage_ratio)
}

pub(super) fn no_self_intersection(set: &MeasurementSet) -> ValidationCheck {
    let id = CheckId::NoSelfIntersection;

    let mut crossing = Vec::new();
    if set.perimeter.self_intersects() {
        crossing.push("perimeter".to_string());
    }
    crossing.extend(
        set.facets
            .iter()
            .filter(|facet| facet.polygon().self_intersects())
            .map(|facet| format!("facet {}", facet.id())),
    );

    if crossing.is_empty() {
        ValidationCheck::passed(id, "No outline crosses itself")
    } else {
        ValidationCheck::violated(
            id,
            format!("Self-intersecting outlines: {}", crossing.join(", ")),
        )
        .with_value(crossing.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{at, gable, rectangle};
    use crate::validation::CheckStatus;
    use crate::{Facet, Pitch, Polygon};

    #[test]
    fn facet_polygons() {
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(valid_facet_polygons(&set).status(), CheckStatus::Passed);

        set.facets.push(Facet::new(
            "sliver",
            Polygon::new(vec![at(0.0, 0.0), at(10.0, 0.0)]),
            Pitch::flat(),
        ));
        let check = valid_facet_polygons(&set);
        assert_eq!(check.status(), CheckStatus::Failed);
        assert!(check.details().contains("sliver"));

        set.facets.clear();
        assert_eq!(valid_facet_polygons(&set).status(), CheckStatus::Failed);
    }

    #[test]
    fn coverage() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        let check = facets_cover_perimeter(&set, &thresholds);
        assert_eq!(check.status(), CheckStatus::Passed);

        set.total_area *= 1.05;
        assert_eq!(
            facets_cover_perimeter(&set, &thresholds).status(),
            CheckStatus::Failed
        );

        set.total_area = 0.0;
        assert_eq!(
            facets_cover_perimeter(&set, &thresholds).status(),
            CheckStatus::Failed
        );

        set.total_area = f64::NAN;
        assert_eq!(
            facets_cover_perimeter(&set, &thresholds).status(),
            CheckStatus::Failed
        );
    }

    #[test]
    fn crossing_outlines() {
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(no_self_intersection(&set).status(), CheckStatus::Passed);

        set.facets.push(Facet::new(
            "bowtie",
            Polygon::new(vec![
                at(0.0, 0.0),
                at(10.0, 10.0),
                at(10.0, 0.0),
                at(0.0, 10.0),
            ]),
            Pitch::flat(),
        ));
        let check = no_self_intersection(&set);
        assert_eq!(check.status(), CheckStatus::Failed);
        assert!(check.details().contains("facet bowtie"));
        assert!(!check.details().contains("perimeter"));

        set.facets.clear();
        set.perimeter = rectangle(40.0, 30.0);
        assert_eq!(no_self_intersection(&set).status(), CheckStatus::Passed);
    }
}
