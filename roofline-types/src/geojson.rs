//! Conversion of GeoJSON geometries into rings of coordinates.
//!
//! Only `Polygon` (its exterior ring) and `LineString` geometries describe a single ring. All other geometry types
//! are rejected with [`RooflineTypesError::UnsupportedGeometry`].

use geojson::{Geometry, Value};

use crate::contour::Ring;
use crate::error::RooflineTypesError;
use crate::geo::Coordinate;

impl TryFrom<&Geometry> for Ring<Coordinate> {
    type Error = RooflineTypesError;

    fn try_from(geometry: &Geometry) -> Result<Self, Self::Error> {
        Self::try_from(&geometry.value)
    }
}

impl TryFrom<&Value> for Ring<Coordinate> {
    type Error = RooflineTypesError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Polygon(rings) => {
                let exterior = rings.first().ok_or_else(|| {
                    RooflineTypesError::Conversion("polygon has no exterior ring".to_string())
                })?;
                if rings.len() > 1 {
                    log::debug!(
                        "Ignoring {} interior ring(s) of a polygon",
                        rings.len() - 1
                    );
                }

                convert_ring(exterior)
            }
            Value::LineString(points) => convert_ring(points),
            other => Err(RooflineTypesError::UnsupportedGeometry(
                geometry_type_name(other).to_string(),
            )),
        }
    }
}

fn convert_ring(positions: &[Vec<f64>]) -> Result<Ring<Coordinate>, RooflineTypesError> {
    positions
        .iter()
        .map(|position| convert_position(position))
        .collect::<Result<Vec<_>, _>>()
        .map(Ring::new)
}

fn convert_position(position: &[f64]) -> Result<Coordinate, RooflineTypesError> {
    if position.len() < 2 {
        return Err(RooflineTypesError::Conversion(
            "position must contain at least 2 dimensions".to_string(),
        ));
    }

    Coordinate::try_new(position[1], position[0])
}

fn geometry_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use assert_matches::assert_matches;

    #[test]
    fn polygon_exterior_ring() {
        let geometry = Geometry::new(Value::Polygon(vec![vec![
            vec![-104.9903, 39.7392],
            vec![-104.9899, 39.7392],
            vec![-104.9899, 39.7395],
            vec![-104.9903, 39.7392],
        ]]));

        let ring = Ring::<Coordinate>::try_from(&geometry).expect("valid polygon");
        assert_eq!(ring.len(), 4);
        assert_eq!(ring[1].lat(), 39.7392);
        assert_eq!(ring[1].lng(), -104.9899);
    }

    #[test]
    fn line_string_ring() {
        let value = Value::LineString(vec![vec![0.0, 0.0], vec![0.001, 0.0], vec![0.001, 0.001]]);
        let ring = Ring::<Coordinate>::try_from(&value).expect("valid line string");
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn unsupported_geometry_types() {
        let value = Value::Point(vec![0.0, 0.0]);
        assert_matches!(
            Ring::<Coordinate>::try_from(&value),
            Err(RooflineTypesError::UnsupportedGeometry(name)) if name == "Point"
        );

        let value = Value::MultiPolygon(vec![]);
        assert_matches!(
            Ring::<Coordinate>::try_from(&value),
            Err(RooflineTypesError::UnsupportedGeometry(_))
        );
    }

    #[test]
    fn malformed_positions() {
        let value = Value::LineString(vec![vec![0.0]]);
        assert_matches!(
            Ring::<Coordinate>::try_from(&value),
            Err(RooflineTypesError::Conversion(_))
        );

        let value = Value::LineString(vec![vec![0.0, 95.0]]);
        assert_matches!(
            Ring::<Coordinate>::try_from(&value),
            Err(RooflineTypesError::InvalidCoordinate { .. })
        );

        let value = Value::Polygon(vec![]);
        assert_matches!(
            Ring::<Coordinate>::try_from(&value),
            Err(RooflineTypesError::Conversion(_))
        );
    }
}
