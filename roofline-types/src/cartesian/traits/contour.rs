use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use crate::contour::ClosedContour;
use crate::segment::Segment;
use num_traits::{Float, One, Zero};

/// Planar algorithms over closed contours. This trait is auto-implemented for all closed contours of cartesian
/// points.
pub trait CartesianClosedContour {
    /// Type of the points of the contour.
    type Point: CartesianPoint2d;

    /// Signed area of the contour computed with the shoelace formula. Counterclockwise contours have positive
    /// area.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Unsigned area of the contour.
    fn area(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Winding direction of the contour.
    fn winding(&self) -> Winding;

    /// Returns true if any two non-adjacent sides of the contour cross each other.
    ///
    /// Every pair of sides is tested, so the cost is quadratic in the number of vertices.
    fn is_self_intersecting(&self) -> bool;
}

impl<P, T> CartesianClosedContour for T
where
    P: CartesianPoint2d,
    T: ClosedContour<Point = P>,
{
    type Point = P;

    fn area_signed(&self) -> P::Num {
        let mut prev;
        let mut iter = self.iter_points_closing();
        if let Some(p) = iter.next() {
            prev = p;
        } else {
            return P::Num::zero();
        }

        let mut aggr = P::Num::zero();

        for p in iter {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (P::Num::one() + P::Num::one())
    }

    fn area(&self) -> P::Num {
        self.area_signed().abs()
    }

    fn winding(&self) -> Winding {
        if self.area_signed() <= P::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    fn is_self_intersecting(&self) -> bool {
        let segments: Vec<Segment<P>> = self.iter_segments().collect();
        let count = segments.len();
        if count < 4 {
            return false;
        }

        for i in 0..count {
            for j in (i + 2)..count {
                if i == 0 && j == count - 1 {
                    // first and last sides share the first vertex
                    continue;
                }

                if segments[i].crosses(&segments[j]) {
                    return true;
                }
            }
        }

        false
    }
}

/// Winding direction of a closed contour.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Winding {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    CounterClockwise,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2;
    use crate::contour::Ring;

    fn ring(points: &[(f64, f64)]) -> Ring<Point2> {
        points.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn area() {
        let contour = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(contour.area_signed(), -0.5);
        assert_eq!(contour.area(), 0.5);

        let contour = ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(contour.area_signed(), 0.5);
        assert_eq!(contour.area(), 0.5);
    }

    #[test]
    fn area_of_single_precision_contour() {
        let contour: Ring<Point2<f32>> = [(0.0f32, 0.0f32), (0.0, 4.0), (3.0, 0.0)]
            .iter()
            .map(|&(x, y)| Point2::new(x, y))
            .collect();
        assert_eq!(contour.area_signed(), -6.0);
        assert_eq!(contour.area(), 6.0);
    }

    #[test]
    fn area_of_degenerate_contours() {
        assert_eq!(ring(&[]).area(), 0.0);
        assert_eq!(ring(&[(1.0, 1.0)]).area(), 0.0);
        assert_eq!(ring(&[(0.0, 0.0), (5.0, 5.0)]).area(), 0.0);
    }

    #[test]
    fn area_does_not_depend_on_start_vertex() {
        let points = [(0.0, 0.0), (30.0, 0.0), (30.0, 20.0), (12.0, 28.0), (0.0, 20.0)];
        let expected = ring(&points).area();

        for shift in 1..points.len() {
            let mut rotated = points.to_vec();
            rotated.rotate_left(shift);
            assert_eq!(ring(&rotated).area(), expected);
        }
    }

    #[test]
    fn duplicated_closing_point_keeps_area() {
        let open = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let closed = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        assert_eq!(open.area(), 100.0);
        assert_eq!(closed.area(), 100.0);
    }

    #[test]
    fn winding() {
        let contour = ring(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]);
        assert_eq!(contour.winding(), Winding::Clockwise);

        let contour = ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(contour.winding(), Winding::CounterClockwise);
    }

    #[test]
    fn bowtie_is_self_intersecting() {
        let bowtie = ring(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);
        assert!(bowtie.is_self_intersecting());
    }

    #[test]
    fn square_is_not_self_intersecting() {
        let square = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert!(!square.is_self_intersecting());

        let closed = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        assert!(!closed.is_self_intersecting());
    }

    #[test]
    fn triangles_never_self_intersect() {
        assert!(!ring(&[(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)]).is_self_intersecting());
    }
}
