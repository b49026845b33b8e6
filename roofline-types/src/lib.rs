//! Geometric primitives used to measure traced roof geometry.
//!
//! The crate works in two coordinate spaces:
//!
//! * **geographic** - latitude and longitude in degrees on a spherical Earth (see [`geo`]). Traced roof outlines and
//!   edge segments arrive in this space.
//! * **cartesian** - a local planar space measured in feet (see [`cartesian`]). Rings are projected into it with
//!   [`geo::LocalProjection`] before any area or intersection computation.
//!
//! Rings of points of either space are represented by the [`Ring`] type, which implements the [`ClosedContour`]
//! trait. Algorithms are provided as blanket traits over closed contours: [`cartesian::CartesianClosedContour`] for
//! planar rings and [`geo::GeoClosedContour`] for geographic ones.

pub mod cartesian;
pub mod error;
pub mod geo;

mod contour;
pub use contour::{ClosedContour, Ring};

mod segment;
pub use segment::Segment;

#[cfg(feature = "geojson")]
pub mod geojson;
