use crate::geo::datum::Datum;

/// Point on the surface of the Earth given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Latitude in degrees.
    fn lat(&self) -> f64;

    /// Longitude in degrees.
    fn lng(&self) -> f64;

    /// Latitude in radians.
    fn lat_rad(&self) -> f64 {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lng_rad(&self) -> f64 {
        self.lng().to_radians()
    }

    /// Great-circle distance to the `other` point in feet on the [`Datum::EARTH`] sphere.
    fn distance(&self, other: &impl GeoPoint) -> f64
    where
        Self: Sized,
    {
        Datum::EARTH.distance(self, other)
    }
}

/// Geographic point that can be constructed from its coordinates.
pub trait NewGeoPoint: GeoPoint + Sized {
    /// Creates a point from latitude and longitude in degrees.
    fn latlng(lat: f64, lng: f64) -> Self;
}
