use std::marker::PhantomData;

use crate::cartesian::{NewCartesianPoint2d, Point2};
use crate::geo::datum::Datum;
use crate::geo::impls::point::Coordinate;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use crate::geo::traits::projection::Projection;

/// Approximate projection of geographic points into a local planar space measured in feet.
///
/// The projection is anchored at a single point, which is mapped to `(0, 0)`. For every other point the east offset
/// is the great-circle distance from the anchor to the point's longitude along the anchor's parallel, and the north
/// offset is the great-circle distance from the anchor to the point's latitude along the anchor's meridian. Offsets
/// are negative to the west and to the south of the anchor.
///
/// The two axes are treated independently, so the projection is neither equal-area nor conformal. The error stays
/// negligible for roof-sized geometry spanning up to a few hundred feet around the anchor, but grows quickly with
/// distance. Do not use it for larger geometries.
#[derive(Debug, Clone, Copy)]
pub struct LocalProjection<In = Coordinate, Out = Point2> {
    anchor: Coordinate,
    datum: Datum,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> LocalProjection<In, Out> {
    /// Creates a new projection anchored at the given point.
    pub fn new(anchor: &impl GeoPoint) -> Self {
        Self {
            anchor: Coordinate::new(anchor.lat(), anchor.lng()),
            datum: Datum::EARTH,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }

    /// Uses the given datum for distance computations instead of [`Datum::EARTH`].
    pub fn with_datum(mut self, datum: Datum) -> Self {
        self.datum = datum;
        self
    }

    /// Anchor of the projection.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    /// East and north offsets of the point from the anchor, in feet.
    ///
    /// Unlike [`Projection::project`] this never fails: non-finite input produces non-finite offsets.
    pub fn offsets(&self, point: &impl GeoPoint) -> (f64, f64) {
        let east = self.datum.distance(
            &self.anchor,
            &Coordinate::new(self.anchor.lat(), point.lng()),
        );
        let north = self.datum.distance(
            &self.anchor,
            &Coordinate::new(point.lat(), self.anchor.lng()),
        );

        let x = if point.lng() < self.anchor.lng() {
            -east
        } else {
            east
        };
        let y = if point.lat() < self.anchor.lat() {
            -north
        } else {
            north
        };

        (x, y)
    }
}

impl<In: NewGeoPoint, Out: NewCartesianPoint2d<f64>> Projection for LocalProjection<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let (x, y) = self.offsets(input);

        if x.is_finite() && y.is_finite() {
            Some(Out::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let radius = self.datum.mean_radius();
        let lat = self.anchor.lat() + (input.y() / radius).to_degrees();

        let sin_half = (input.x().abs() / (2.0 * radius)).sin() / self.anchor.lat_rad().cos();
        if sin_half.is_nan() || sin_half.abs() > 1.0 {
            return None;
        }

        let d_lng = (2.0 * sin_half.asin()).to_degrees();
        let lng = if input.x() < 0.0 {
            self.anchor.lng() - d_lng
        } else {
            self.anchor.lng() + d_lng
        };

        Some(In::latlng(lat, lng))
    }
}
