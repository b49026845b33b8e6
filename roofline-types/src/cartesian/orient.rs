use crate::cartesian::CartesianPoint2d;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points.
    ///
    /// The orientation is the sign of `(r.x - p.x) * (q.y - p.y) - (q.x - p.x) * (r.y - p.y)`: positive values mean
    /// that `p -> q -> r` turns clockwise. Triplets with non-finite coordinates are reported as collinear.
    pub fn triplet<Num: num_traits::Float>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        let direction = (r.x() - p.x()) * (q.y() - p.y()) - (q.x() - p.x()) * (r.y() - p.y());
        if direction > Num::zero() {
            Self::Clockwise
        } else if direction < Num::zero() {
            Self::Counterclockwise
        } else {
            Self::Collinear
        }
    }

    /// Returns true if one of the orientations is clockwise and the other is counterclockwise.
    pub fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Clockwise, Self::Counterclockwise) | (Self::Counterclockwise, Self::Clockwise)
        )
    }
}
