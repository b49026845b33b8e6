//! Closed contours (rings) of points.
//!
//! A ring is a sequence of points where the last point is implicitly connected to the first one. Traced input
//! often repeats the first point at the end of the sequence; a ring does not require it and does not remove it
//! either. Algorithms built on [`ClosedContour`] are written so that a duplicated closing point only adds a
//! zero-length segment and does not change their results.

use serde::{Deserialize, Serialize};

use crate::geo::Projection;
use crate::segment::Segment;

/// A closed sequence of points. See module level documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the contour in their stored order.
    ///
    /// The first point is not repeated at the end. Use [`ClosedContour::iter_points_closing`] to get it again.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Same as [`ClosedContour::iter_points`], but repeats the first point at the end of the iterator.
    fn iter_points_closing(&self) -> impl Iterator<Item = &'_ Self::Point> {
        ContourPointsIterator::new(self.iter_points())
    }

    /// Iterates over segments of the contour, including the segment between the last and the first points.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(ContourPointsIterator::new(self.iter_points()))
    }
}

/// Simple [`ClosedContour`] implementation backed by a vector of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring<Point> {
    points: Vec<Point>,
}

impl<Point> Ring<Point> {
    /// Creates a new ring. The points are stored as given.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Points of the ring.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the ring and returns its points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Projects all the points of the ring with the given projection.
    ///
    /// Returns `None` if any of the points cannot be projected.
    pub fn project_points<P, Proj>(&self, projection: &Proj) -> Option<Ring<P>>
    where
        Proj: Projection<InPoint = Point, OutPoint = P> + ?Sized,
    {
        let points = self
            .points
            .iter()
            .map(|p| projection.project(p))
            .collect::<Option<Vec<P>>>()?;
        Some(Ring { points })
    }
}

impl<Point> std::ops::Deref for Ring<Point> {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.points
    }
}

impl<Point> From<Vec<Point>> for Ring<Point> {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl<Point> FromIterator<Point> for Ring<Point> {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<P> ClosedContour for Ring<P> {
    type Point = P;

    fn iter_points(&self) -> impl Iterator<Item = &'_ P> {
        self.points.iter()
    }
}

/// Iterator of contour points that repeats the first point at the end.
#[derive(Debug, Clone)]
pub struct ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    first_point: Option<&'a P>,
    started: bool,
}

impl<'a, P: 'a, Iter> ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            first_point: None,
            started: false,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if !self.started {
            self.started = true;
            self.first_point = next;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: ContourPointsIterator<'a, P, Iter>,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: ContourPointsIterator<'a, P, Iter>) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_point = self.points_iter.next()?;
            if let Some(prev) = self.prev_point.replace(next_point) {
                return Some(Segment(prev, next_point));
            }
        }
    }
}
