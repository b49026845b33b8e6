use roofline_types::geo::Coordinate;

use crate::{EdgeSegment, EdgeType, Facet, MeasurementSet, Pitch, Polygon};

pub const FEET_PER_DEGREE: f64 = 20_902_231.0 * std::f64::consts::PI / 180.0;

/// Coordinate `x_ft` east and `y_ft` north of the (0, 0) point.
pub fn at(x_ft: f64, y_ft: f64) -> Coordinate {
    Coordinate::new(y_ft / FEET_PER_DEGREE, x_ft / FEET_PER_DEGREE)
}

/// Closed rectangle ring with the first point repeated at the end.
pub fn rectangle(width_ft: f64, height_ft: f64) -> Polygon {
    Polygon::new(vec![
        at(0.0, 0.0),
        at(width_ft, 0.0),
        at(width_ft, height_ft),
        at(0.0, height_ft),
        at(0.0, 0.0),
    ])
}

pub fn edge(edge_type: EdgeType, from: (f64, f64), to: (f64, f64)) -> EdgeSegment {
    EdgeSegment::new(edge_type, at(from.0, from.1), at(to.0, to.1))
}

/// Gable roof of the given footprint: eaves along the long sides, a ridge along the middle and rakes on the
/// gable ends split at the ridge.
pub fn gable(width_ft: f64, depth_ft: f64, pitch: &str) -> MeasurementSet {
    let half = depth_ft / 2.0;
    let facets = vec![
        Facet::new("south", rectangle_at(0.0, 0.0, width_ft, half), Pitch::new(pitch)),
        Facet::new("north", rectangle_at(0.0, half, width_ft, half), Pitch::new(pitch)),
    ];
    let edges = vec![
        edge(EdgeType::Eave, (0.0, 0.0), (width_ft, 0.0)),
        edge(EdgeType::Eave, (0.0, depth_ft), (width_ft, depth_ft)),
        edge(EdgeType::Ridge, (0.0, half), (width_ft, half)),
        edge(EdgeType::Rake, (0.0, 0.0), (0.0, half)),
        edge(EdgeType::Rake, (0.0, half), (0.0, depth_ft)),
        edge(EdgeType::Rake, (width_ft, 0.0), (width_ft, half)),
        edge(EdgeType::Rake, (width_ft, half), (width_ft, depth_ft)),
    ];

    MeasurementSet::assemble(
        facets,
        edges,
        rectangle(width_ft, depth_ft),
        Pitch::new(pitch),
    )
}

fn rectangle_at(x_ft: f64, y_ft: f64, width_ft: f64, height_ft: f64) -> Polygon {
    Polygon::new(vec![
        at(x_ft, y_ft),
        at(x_ft + width_ft, y_ft),
        at(x_ft + width_ft, y_ft + height_ft),
        at(x_ft, y_ft + height_ft),
        at(x_ft, y_ft),
    ])
}
