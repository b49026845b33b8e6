mod local;

pub use local::LocalProjection;
