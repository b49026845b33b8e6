use crate::cartesian::{CartesianPoint2d, Orientation};

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P> Clone for Segment<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Segment<'_, P> {}

impl<'a, P: CartesianPoint2d> Segment<'a, P> {
    /// Euclidean length of the segment.
    pub fn length(&self) -> P::Num {
        self.0.distance(self.1)
    }

    /// Returns true if the segments properly cross each other.
    ///
    /// The segments cross when the endpoints of `other` lie strictly on different sides of the line through
    /// `self`, and the endpoints of `self` lie strictly on different sides of the line through `other`. Segments
    /// that only touch (share an endpoint, or one endpoint lies on the other segment) or are collinear do not
    /// cross.
    pub fn crosses<Point: CartesianPoint2d<Num = P::Num>>(&self, other: &Segment<Point>) -> bool {
        let o1 = Orientation::triplet(other.0, other.1, self.0);
        let o2 = Orientation::triplet(other.0, other.1, self.1);
        let o3 = Orientation::triplet(self.0, self.1, other.0);
        let o4 = Orientation::triplet(self.0, self.1, other.1);

        o1.is_opposite(o2) && o3.is_opposite(o4)
    }
}
