//! Implementations of geographic point types and projections.

pub mod point;
pub mod projection;
