//! Types and functions on geometries in local cartesian coordinates (feet).

mod impls;
mod orient;
mod traits;

pub use impls::Point2;
pub use orient::Orientation;
pub use traits::*;
