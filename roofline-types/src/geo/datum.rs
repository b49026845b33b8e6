use crate::geo::traits::point::GeoPoint;

/// Spherical model of a celestial body used for distance computations.
///
/// All distances are in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    mean_radius: f64,
}

impl Datum {
    /// Earth as a sphere with the WGS84 mean radius expressed in feet.
    pub const EARTH: Self = Datum {
        mean_radius: 20_902_231.0,
    };

    /// Creates a sphere with the given mean radius in feet.
    pub const fn with_mean_radius(mean_radius: f64) -> Self {
        Self { mean_radius }
    }

    /// Mean radius of the sphere in feet.
    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    /// Great-circle distance between two points in feet, computed with the haversine formula.
    ///
    /// Non-finite coordinates produce a `NaN` distance.
    pub fn distance(&self, from: &impl GeoPoint, to: &impl GeoPoint) -> f64 {
        let d_lat = to.lat_rad() - from.lat_rad();
        let d_lng = to.lng_rad() - from.lng_rad();

        let a = (d_lat / 2.0).sin().powi(2)
            + from.lat_rad().cos() * to.lat_rad().cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * self.mean_radius * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

impl Default for Datum {
    fn default() -> Self {
        Self::EARTH
    }
}
