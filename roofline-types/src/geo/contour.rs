use crate::cartesian::{CartesianClosedContour, Point2};
use crate::contour::{ClosedContour, Ring};
use crate::geo::impls::projection::LocalProjection;
use crate::geo::traits::point::GeoPoint;

/// Measurements of closed contours of geographic points. This trait is auto-implemented for all closed contours of
/// [`GeoPoint`]s.
///
/// Area and self-intersection are computed on the contour projected with a [`LocalProjection`] anchored at its first
/// point, so they inherit the projection's size limits.
pub trait GeoClosedContour {
    /// Type of the points of the contour.
    type Point: GeoPoint;

    /// Projects the contour into the local planar space anchored at its first point.
    ///
    /// An empty contour produces an empty ring.
    fn to_local(&self) -> Ring<Point2>;

    /// Flat (plan view) area of the contour in square feet. Contours with fewer than 3 points have zero area.
    fn area_sqft(&self) -> f64;

    /// Sum of great-circle lengths of all sides of the contour in feet, including the side from the last point
    /// back to the first one. Contours with fewer than 3 points have zero perimeter.
    fn perimeter_ft(&self) -> f64;

    /// Distance in feet between the first and the last stored points, or `None` for an empty contour.
    fn closure_gap_ft(&self) -> Option<f64>;

    /// Returns true if any two non-adjacent sides of the projected contour cross each other.
    fn self_intersects(&self) -> bool;
}

impl<P, T> GeoClosedContour for T
where
    P: GeoPoint,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn to_local(&self) -> Ring<Point2> {
        let Some(anchor) = self.iter_points().next() else {
            return Ring::default();
        };

        let projection: LocalProjection = LocalProjection::new(anchor);
        log::trace!(
            "Projecting contour anchored at ({}, {})",
            anchor.lat(),
            anchor.lng()
        );

        self.iter_points()
            .map(|p| {
                let (x, y) = projection.offsets(p);
                Point2::new(x, y)
            })
            .collect()
    }

    fn area_sqft(&self) -> f64 {
        if self.iter_points().count() < 3 {
            return 0.0;
        }

        self.to_local().area()
    }

    fn perimeter_ft(&self) -> f64 {
        if self.iter_points().count() < 3 {
            return 0.0;
        }

        self.iter_segments()
            .map(|segment| segment.0.distance(segment.1))
            .sum()
    }

    fn closure_gap_ft(&self) -> Option<f64> {
        let first = self.iter_points().next()?;
        let last = self.iter_points().last()?;
        Some(first.distance(last))
    }

    fn self_intersects(&self) -> bool {
        self.to_local().is_self_intersecting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::{Coordinate, Datum};
    use approx::assert_relative_eq;

    const FEET_PER_DEGREE: f64 = 20_902_231.0 * std::f64::consts::PI / 180.0;

    fn rectangle(width_ft: f64, height_ft: f64) -> Ring<Coordinate> {
        let d_lat = height_ft / FEET_PER_DEGREE;
        let d_lng = width_ft / FEET_PER_DEGREE;

        Ring::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, d_lng),
            Coordinate::new(d_lat, d_lng),
            Coordinate::new(d_lat, 0.0),
        ])
    }

    #[test]
    fn rectangle_area_and_perimeter() {
        let ring = rectangle(40.0, 30.0);

        assert_relative_eq!(ring.area_sqft(), 1200.0, max_relative = 0.01);
        assert_relative_eq!(ring.perimeter_ft(), 140.0, max_relative = 0.01);
    }

    #[test]
    fn area_does_not_depend_on_start_vertex() {
        let points = vec![
            Coordinate::new(39.73920, -104.99030),
            Coordinate::new(39.73920, -104.98990),
            Coordinate::new(39.73945, -104.98990),
            Coordinate::new(39.73960, -104.99010),
            Coordinate::new(39.73945, -104.99030),
        ];
        let expected = Ring::new(points.clone()).area_sqft();
        assert!(expected > 0.0);

        for shift in 1..points.len() {
            let mut rotated = points.clone();
            rotated.rotate_left(shift);
            assert_relative_eq!(
                Ring::new(rotated).area_sqft(),
                expected,
                max_relative = 1e-4
            );
        }
    }

    #[test]
    fn degenerate_contours() {
        let empty: Ring<Coordinate> = Ring::default();
        assert_eq!(empty.area_sqft(), 0.0);
        assert_eq!(empty.perimeter_ft(), 0.0);
        assert_eq!(empty.closure_gap_ft(), None);
        assert!(empty.to_local().is_empty());

        let line = Ring::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(0.001, 0.0)]);
        assert_eq!(line.area_sqft(), 0.0);
        assert_eq!(line.perimeter_ft(), 0.0);
    }

    #[test]
    fn closure_gap() {
        let mut points = rectangle(40.0, 30.0).into_points();
        let open = Ring::new(points.clone());
        assert_relative_eq!(
            open.closure_gap_ft().expect("non-empty ring"),
            30.0,
            max_relative = 0.01
        );

        points.push(points[0]);
        let closed = Ring::new(points);
        assert_eq!(closed.closure_gap_ft(), Some(0.0));
        assert_relative_eq!(closed.area_sqft(), 1200.0, max_relative = 0.01);
    }

    #[test]
    fn geographic_bowtie_self_intersects() {
        let d = 10.0 / FEET_PER_DEGREE;
        let bowtie = Ring::new(vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(d, d),
            Coordinate::new(0.0, d),
            Coordinate::new(d, 0.0),
        ]);
        assert!(bowtie.self_intersects());
        assert!(!rectangle(10.0, 10.0).self_intersects());
    }

    #[test]
    fn local_ring_starts_at_origin() {
        let local = rectangle(40.0, 30.0).to_local();
        assert_eq!(local[0], Point2::new(0.0, 0.0));
        assert_relative_eq!(local[2].coords()[0], 40.0, max_relative = 1e-6);
        assert_relative_eq!(local[2].coords()[1], 30.0, max_relative = 1e-6);
        assert_eq!(Datum::EARTH.mean_radius(), 20_902_231.0);
    }
}
