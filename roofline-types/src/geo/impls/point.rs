use serde::{Deserialize, Serialize};

use crate::error::RooflineTypesError;
use crate::geo::traits::point::{GeoPoint, NewGeoPoint};

/// Geographic coordinate in degrees on the WGS84 sphere.
///
/// A coordinate created with [`Coordinate::new`] is not checked. Coordinates coming from external input should be
/// created with [`Coordinate::try_new`] or deserialized, which rejects non-finite and out-of-range values.
///
/// Deserialization accepts either an object `{"lat": .., "lng": ..}` (`lon` is accepted as an alias of `lng`) or a
/// GeoJSON-ordered pair `[lng, lat]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "CoordinateRepr")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a new coordinate without validating it.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a new coordinate, checking that both values are finite and inside the valid range.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, RooflineTypesError> {
        if lat.is_finite() && lng.is_finite() && lat.abs() <= 90.0 && lng.abs() <= 180.0 {
            Ok(Self { lat, lng })
        } else {
            Err(RooflineTypesError::InvalidCoordinate { lat, lng })
        }
    }

    /// Point halfway between the two coordinates.
    ///
    /// Coordinates are averaged component-wise, which is accurate only for points close to each other.
    pub fn midpoint(&self, other: &Self) -> Self {
        Self {
            lat: (self.lat + other.lat) / 2.0,
            lng: (self.lng + other.lng) / 2.0,
        }
    }
}

impl GeoPoint for Coordinate {
    fn lat(&self) -> f64 {
        self.lat
    }

    fn lng(&self) -> f64 {
        self.lng
    }
}

impl NewGeoPoint for Coordinate {
    fn latlng(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateRepr {
    Object {
        lat: f64,
        #[serde(alias = "lon")]
        lng: f64,
    },
    Pair([f64; 2]),
}

impl TryFrom<CoordinateRepr> for Coordinate {
    type Error = RooflineTypesError;

    fn try_from(value: CoordinateRepr) -> Result<Self, Self::Error> {
        match value {
            CoordinateRepr::Object { lat, lng } => Coordinate::try_new(lat, lng),
            CoordinateRepr::Pair([lng, lat]) => Coordinate::try_new(lat, lng),
        }
    }
}

/// Creates a new [`Coordinate`] from latitude and longitude values (in degrees).
///
/// ```
/// use roofline_types::geo::GeoPoint;
/// use roofline_types::latlng;
///
/// let point = latlng!(39.7392, -104.9903);
/// assert_eq!(point.lat(), 39.7392);
/// ```
#[macro_export]
macro_rules! latlng {
    ($lat:expr, $lng:expr) => {
        $crate::geo::Coordinate::new($lat, $lng)
    };
}
