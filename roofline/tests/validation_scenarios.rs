use approx::assert_relative_eq;
use assert_matches::assert_matches;
use roofline::roofline_types::geo::{Coordinate, GeoClosedContour};
use roofline::{
    CheckId, CheckStatus, EdgeSegment, EdgeType, ErrorCode, Facet, GroundTruth, MeasurementSet,
    Pitch, Polygon, RooflineError, Severity,
};

const FEET_PER_DEGREE: f64 = 20_902_231.0 * std::f64::consts::PI / 180.0;
const GABLE_JSON: &str = include_str!("data/gable.json");

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn at(x_ft: f64, y_ft: f64) -> Coordinate {
    Coordinate::new(y_ft / FEET_PER_DEGREE, x_ft / FEET_PER_DEGREE)
}

fn rectangle(x_ft: f64, y_ft: f64, width_ft: f64, height_ft: f64) -> Polygon {
    Polygon::new(vec![
        at(x_ft, y_ft),
        at(x_ft + width_ft, y_ft),
        at(x_ft + width_ft, y_ft + height_ft),
        at(x_ft, y_ft + height_ft),
        at(x_ft, y_ft),
    ])
}

fn edge(edge_type: EdgeType, from: (f64, f64), to: (f64, f64)) -> EdgeSegment {
    EdgeSegment::new(edge_type, at(from.0, from.1), at(to.0, to.1))
}

/// A 40 x 30 ft gable roof: one facet covering the whole footprint, eaves on the long sides, rakes split at the
/// ridge and a ridge between the rake midpoints.
fn gable_roof(pitch: &str) -> MeasurementSet {
    let outline = rectangle(0.0, 0.0, 40.0, 30.0);
    let facets = vec![Facet::new("roof", outline.clone(), Pitch::new(pitch))];
    let edges = vec![
        edge(EdgeType::Eave, (0.0, 0.0), (40.0, 0.0)),
        edge(EdgeType::Eave, (0.0, 30.0), (40.0, 30.0)),
        edge(EdgeType::Rake, (0.0, 0.0), (0.0, 15.0)),
        edge(EdgeType::Rake, (0.0, 15.0), (0.0, 30.0)),
        edge(EdgeType::Rake, (40.0, 0.0), (40.0, 15.0)),
        edge(EdgeType::Rake, (40.0, 15.0), (40.0, 30.0)),
        edge(EdgeType::Ridge, (0.0, 15.0), (40.0, 15.0)),
    ];

    MeasurementSet::assemble(facets, edges, outline, Pitch::new(pitch))
}

#[test]
fn happy_path() {
    init_logger();
    let set = gable_roof("6/12");
    assert_eq!(set.perimeter.closure_gap_ft(), Some(0.0));
    assert_eq!(set.total_area, set.facets[0].adjusted_area_sqft());

    let result = set.validate();
    assert!(result.is_valid(), "{}", result.summary());
    assert_eq!(result.overall_score(), 100.0);
    assert!(result.critical_checks_passed());
    assert!(!result.requires_human_override());
    assert!(!result.override_justification_required());
    assert!(result.blocking_errors().is_empty());
    assert!(result.warnings().is_empty());
    assert_eq!(result.checks().len(), 15);
}

#[test]
fn area_mismatch() {
    init_logger();
    let side = 970.0_f64.sqrt();
    let outline = rectangle(0.0, 0.0, side, side);
    let facets = vec![Facet::new("roof", outline.clone(), Pitch::flat())];
    let mut set = MeasurementSet::assemble(facets, Vec::new(), outline, Pitch::flat());
    assert_relative_eq!(set.facet_area_sum(), 970.0, max_relative = 0.001);

    set.total_area = 1000.0;
    let result = set.validate();

    let check = result.check(CheckId::AreaSumMatch).unwrap();
    assert_eq!(check.status(), CheckStatus::Failed);
    assert_relative_eq!(check.value().unwrap(), 0.03, max_relative = 0.05);
    assert!(result.has_blocking_error(ErrorCode::AreaSumMismatch));
    assert!(!result.is_valid());
}

#[test]
fn ground_truth_deviation() {
    init_logger();
    let mut set = gable_roof("6/12");
    set.total_area = 5000.0;
    set.ground_truth = Some(GroundTruth {
        total_area: Some(5060.0),
        ..Default::default()
    });

    let result = set.validate();
    let issue = result
        .blocking_errors()
        .iter()
        .find(|issue| issue.code == ErrorCode::AreaAccuracyFailed)
        .unwrap();
    assert_eq!(issue.severity, Severity::Critical);
    assert_eq!(issue.check, CheckId::AreaGroundTruth);
    assert!(!result.is_valid());
    assert!(!result.requires_human_override());
}

#[test]
fn pitch_out_of_range() {
    init_logger();
    let mut set = gable_roof("6/12");
    set.pitch = Pitch::new("30/12");

    let result = set.validate();
    assert_eq!(
        result.check(CheckId::ValidPitch).map(|c| c.status()),
        Some(CheckStatus::Failed)
    );
    assert!(result.has_blocking_error(ErrorCode::InvalidPitch));
    assert!(!result.is_valid());
    assert!(result.requires_human_override());
}

#[test]
fn high_severity_failures_can_be_overridden() {
    init_logger();
    let mut set = gable_roof("6/12");
    set.linear_features
        .push(edge(EdgeType::Ridge, (1.0, 15.5), (39.0, 15.5)));

    let result = set.validate();
    assert!(result.has_blocking_error(ErrorCode::OverlappingSegments));
    assert!(result
        .blocking_errors()
        .iter()
        .all(|issue| issue.severity == Severity::High));
    assert!(!result.is_valid());
    assert!(result.requires_human_override());
    assert!(result.override_justification_required());
    assert!(result.overall_score() < 100.0);
}

#[test]
fn broken_geometry_blocks_without_override() {
    init_logger();
    let mut set = gable_roof("6/12");
    set.perimeter = Polygon::new(vec![at(0.0, 0.0), at(40.0, 30.0), at(40.0, 0.0), at(0.0, 30.0)]);

    let result = set.validate();
    assert!(result.has_blocking_error(ErrorCode::PerimeterNotClosed));
    assert!(result.has_blocking_error(ErrorCode::SelfIntersection));
    assert!(!result.critical_checks_passed());
    assert!(!result.requires_human_override());
}

#[test]
fn warnings_only() {
    init_logger();
    let mut set = gable_roof("flat");
    set.linear_features
        .retain(|segment| segment.edge_type() != EdgeType::Ridge);
    set.ridge_total = 0.0;

    let result = set.validate();
    assert!(result.is_valid());
    assert_eq!(result.warnings().len(), 1);
    assert_eq!(result.warnings()[0].code, ErrorCode::NoRidgeDetected);
    assert_eq!(result.overall_score(), 92.3);
}

#[test]
fn empty_measurement_set_degrades_checks() {
    init_logger();
    let result = MeasurementSet::default().validate();

    assert_eq!(result.checks().len(), 15);
    assert!(!result.is_valid());
    assert!(result.overall_score() >= 0.0 && result.overall_score() <= 100.0);
    for id in [
        CheckId::SegmentsConnected,
        CheckId::AreaGroundTruth,
        CheckId::LinearGroundTruth,
        CheckId::EaveRakePerimeter,
        CheckId::FacetPitchConsistency,
    ] {
        assert_eq!(
            result.check(id).map(|c| c.status()),
            Some(CheckStatus::Skipped),
            "{id}"
        );
    }
}

#[test]
fn json_fixture_is_valid() {
    init_logger();
    let set = MeasurementSet::from_json(GABLE_JSON).unwrap();
    assert_eq!(set.facets.len(), 2);
    assert_eq!(set.linear_features.len(), 7);
    assert_relative_eq!(set.facet_area_sum(), set.total_area, max_relative = 0.001);
    assert_eq!(set.predominant_pitch(), Some(Pitch::new("6/12")));

    let result = set.validate();
    assert!(result.is_valid(), "{}", result.summary());
    assert_eq!(result.overall_score(), 100.0);
    assert_eq!(result.skipped_count(), 0);
}

#[test]
fn result_serializes_to_json() {
    let result = MeasurementSet::from_json(GABLE_JSON).unwrap().validate();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["isValid"], true);
    assert_eq!(value["overallScore"], 100.0);
    assert_eq!(value["checks"][0]["id"], "perimeter_closed");
    assert_eq!(value["checks"][14]["id"], "facet_pitch_consistency");
}

#[test]
fn contract_violations_are_errors() {
    let json = GABLE_JSON.replacen("\"lat\": 39.7392,", "\"lat\": 139.7392,", 1);
    assert_matches!(MeasurementSet::from_json(&json), Err(RooflineError::Json(_)));

    let json = GABLE_JSON.replacen("\"lengthFt\": 48.0", "\"lengthFt\": -48.0", 1);
    assert_matches!(MeasurementSet::from_json(&json), Err(RooflineError::Json(_)));

    assert_matches!(
        MeasurementSet::from_json(r#"{"perimeter": {"lat": 0.0}}"#),
        Err(RooflineError::Json(_))
    );
}

#[cfg(feature = "geojson")]
#[test]
fn facet_from_geojson() {
    use roofline::roofline_types::error::RooflineTypesError;

    let geometry: geojson::Geometry = serde_json::from_str(
        r#"{"type": "Polygon", "coordinates": [[
            [-104.9903, 39.7392], [-104.9901289, 39.7392], [-104.9901289, 39.7392878],
            [-104.9903, 39.7392878], [-104.9903, 39.7392]
        ]]}"#,
    )
    .unwrap();
    let polygon = Polygon::try_from(&geometry).map_err(RooflineError::from).unwrap();
    let facet = Facet::new("A", polygon, Pitch::new("4/12"));
    assert_relative_eq!(facet.flat_area_sqft(), 48.0 * 32.0, max_relative = 0.01);

    let point: geojson::Geometry =
        serde_json::from_str(r#"{"type": "Point", "coordinates": [-104.99, 39.73]}"#).unwrap();
    assert_matches!(
        Polygon::try_from(&point).map_err(RooflineError::from),
        Err(RooflineError::Types(RooflineTypesError::UnsupportedGeometry(_)))
    );
}
