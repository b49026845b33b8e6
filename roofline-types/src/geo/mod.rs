//! Geometries in geographic coordinates (latitude and longitude, see [`GeoPoint`]), great-circle distances (see
//! [`Datum`]) and conversion of geographic rings into a local planar space (see [`LocalProjection`]).

mod contour;
mod datum;
pub mod impls;
mod traits;

pub use contour::GeoClosedContour;
pub use datum::Datum;
pub use impls::point::Coordinate;
pub use impls::projection::LocalProjection;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
