/// Conversion of points between two coordinate spaces.
pub trait Projection {
    /// Type of the input points.
    type InPoint;
    /// Type of the projected points.
    type OutPoint;

    /// Projects a point. Returns `None` if the point cannot be projected.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Reverse operation of [`Projection::project`].
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
