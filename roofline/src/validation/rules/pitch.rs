use crate::measurement::MeasurementSet;
use crate::pitch::Pitch;
use crate::validation::{CheckId, ValidationCheck, ValidationThresholds};

pub(super) fn valid_pitch(set: &MeasurementSet, thresholds: &ValidationThresholds) -> ValidationCheck {
    let id = CheckId::ValidPitch;
    let in_range = |pitch: &Pitch| (0.0..=thresholds.max_pitch_rise).contains(&pitch.rise());

    let mut invalid: Vec<String> = Vec::new();
    if !in_range(&set.pitch) {
        invalid.push(format!("roof pitch {}", set.pitch));
    }
    invalid.extend(
        set.facets
            .iter()
            .filter(|facet| !in_range(facet.pitch()))
            .map(|facet| format!("facet {} pitch {}", facet.id(), facet.pitch())),
    );

    let check = if invalid.is_empty() {
        ValidationCheck::passed(id, format!("Pitch {} is in the valid range", set.pitch))
    } else {
        ValidationCheck::violated(
            id,
            format!(
                "Pitch outside of flat to {}/12: {}",
                thresholds.max_pitch_rise,
                invalid.join(", ")
            ),
        )
    };

    check
        .with_value(set.pitch.rise())
        .with_threshold(thresholds.max_pitch_rise)
}

pub(super) fn facet_pitch_consistency(
    set: &MeasurementSet,
    thresholds: &ValidationThresholds,
) -> ValidationCheck {
    let id = CheckId::FacetPitchConsistency;
    if set.facets.is_empty() {
        return ValidationCheck::skipped(id, "No facets to compare");
    }

    let (min, max) = set
        .facets
        .iter()
        .map(|facet| facet.pitch().rise())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), rise| {
            (min.min(rise), max.max(rise))
        });
    let spread = max - min;

    let check = if spread <= thresholds.max_pitch_spread {
        ValidationCheck::passed(id, format!("Facet pitches differ by at most {spread}/12"))
    } else {
        ValidationCheck::violated(
            id,
            format!("Facet pitches range from {min}/12 to {max}/12"),
        )
    };

    check
        .with_value(spread)
        .with_threshold(thresholds.max_pitch_spread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{gable, rectangle};
    use crate::validation::CheckStatus;
    use crate::Facet;

    #[test]
    fn pitch_range() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(valid_pitch(&set, &thresholds).status(), CheckStatus::Passed);

        for pitch in ["flat", "24/12", "steep"] {
            set.pitch = Pitch::new(pitch);
            assert_eq!(valid_pitch(&set, &thresholds).status(), CheckStatus::Passed);
        }

        for pitch in ["30/12", "-1/12"] {
            set.pitch = Pitch::new(pitch);
            let check = valid_pitch(&set, &thresholds);
            assert_eq!(check.status(), CheckStatus::Failed);
            assert!(check.details().contains(pitch));
        }
    }

    #[test]
    fn facet_pitch_is_validated_too() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        set.facets
            .push(Facet::new("porch", rectangle(10.0, 10.0), Pitch::new("26/12")));

        let check = valid_pitch(&set, &thresholds);
        assert_eq!(check.status(), CheckStatus::Failed);
        assert!(check.details().contains("facet porch"));
    }

    #[test]
    fn pitch_spread() {
        let thresholds = ValidationThresholds::default();
        let mut set = gable(40.0, 30.0, "6/12");
        assert_eq!(
            facet_pitch_consistency(&set, &thresholds).status(),
            CheckStatus::Passed
        );

        set.facets
            .push(Facet::new("porch", rectangle(10.0, 10.0), Pitch::new("2/12")));
        assert_eq!(
            facet_pitch_consistency(&set, &thresholds).status(),
            CheckStatus::Passed
        );

        set.facets
            .push(Facet::new("dormer", rectangle(5.0, 5.0), Pitch::new("12/12")));
        let check = facet_pitch_consistency(&set, &thresholds);
        assert_eq!(check.status(), CheckStatus::Warning);
        assert_eq!(check.value(), Some(10.0));

        set.facets.clear();
        assert_eq!(
            facet_pitch_consistency(&set, &thresholds).status(),
            CheckStatus::Skipped
        );
    }
}
