//! Roof facets: planar sections of a roof with their measurements.

use roofline_types::geo::GeoClosedContour;
use serde::{Deserialize, Serialize};

use crate::pitch::Pitch;
use crate::Polygon;

/// Compass direction a roof facet faces (the downslope direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Aspect {
    /// North.
    #[serde(alias = "n")]
    N,
    /// North-east.
    #[serde(alias = "ne")]
    NE,
    /// East.
    #[serde(alias = "e")]
    E,
    /// South-east.
    #[serde(alias = "se")]
    SE,
    /// South.
    #[serde(alias = "s")]
    S,
    /// South-west.
    #[serde(alias = "sw")]
    SW,
    /// West.
    #[serde(alias = "w")]
    W,
    /// North-west.
    #[serde(alias = "nw")]
    NW,
}

impl Aspect {
    /// All directions clockwise starting from north.
    pub const ALL: [Aspect; 8] = [
        Aspect::N,
        Aspect::NE,
        Aspect::E,
        Aspect::SE,
        Aspect::S,
        Aspect::SW,
        Aspect::W,
        Aspect::NW,
    ];

    /// Nearest compass direction to the given azimuth in degrees (clockwise from north).
    ///
    /// Any finite value is accepted and normalized into `[0, 360)`. Returns `None` for non-finite values.
    pub fn from_azimuth(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }

        let normalized = degrees.rem_euclid(360.0);
        let sector = ((normalized + 22.5) / 45.0).floor() as usize % Self::ALL.len();
        Some(Self::ALL[sector])
    }

    /// Azimuth of the direction in degrees.
    pub fn azimuth(&self) -> f64 {
        match self {
            Aspect::N => 0.0,
            Aspect::NE => 45.0,
            Aspect::E => 90.0,
            Aspect::SE => 135.0,
            Aspect::S => 180.0,
            Aspect::SW => 225.0,
            Aspect::W => 270.0,
            Aspect::NW => 315.0,
        }
    }
}

/// One planar section of a roof.
///
/// Flat area, surface area and perimeter are derived from the polygon and pitch when the facet is created and never
/// change afterwards. Facets deserialize from `{"id", "polygon", "pitch", "orientation"}`; the derived fields of
/// the input, if any, are ignored and computed again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FacetInput")]
pub struct Facet {
    id: String,
    polygon: Polygon,
    pitch: Pitch,
    orientation: Option<Aspect>,
    flat_area_sqft: f64,
    adjusted_area_sqft: f64,
    perimeter_ft: f64,
}

impl Facet {
    /// Creates a new facet and computes its measurements.
    pub fn new(id: impl Into<String>, polygon: Polygon, pitch: Pitch) -> Self {
        let flat_area_sqft = polygon.area_sqft();
        let adjusted_area_sqft = pitch.adjusted_area(flat_area_sqft);
        let perimeter_ft = polygon.perimeter_ft();

        Self {
            id: id.into(),
            polygon,
            pitch,
            orientation: None,
            flat_area_sqft,
            adjusted_area_sqft,
            perimeter_ft,
        }
    }

    /// Sets the direction the facet faces.
    pub fn with_orientation(mut self, orientation: Aspect) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Identifier of the facet.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Outline of the facet.
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Pitch of the facet.
    pub fn pitch(&self) -> &Pitch {
        &self.pitch
    }

    /// Direction the facet faces, if known.
    pub fn orientation(&self) -> Option<Aspect> {
        self.orientation
    }

    /// Plan view area in square feet.
    pub fn flat_area_sqft(&self) -> f64 {
        self.flat_area_sqft
    }

    /// Surface area in square feet, corrected for the pitch.
    pub fn adjusted_area_sqft(&self) -> f64 {
        self.adjusted_area_sqft
    }

    /// Perimeter of the outline in feet.
    pub fn perimeter_ft(&self) -> f64 {
        self.perimeter_ft
    }

    /// Number of distinct vertices of the outline. A repeated closing vertex is not counted.
    pub fn vertex_count(&self) -> usize {
        let points = self.polygon.points();
        match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() > 1 && first == last => points.len() - 1,
            _ => points.len(),
        }
    }

    /// A facet is valid if it has at least 3 vertices and a positive area.
    pub fn is_valid(&self) -> bool {
        self.vertex_count() >= 3 && self.flat_area_sqft > 0.0
    }
}

#[derive(Deserialize)]
struct FacetInput {
    id: String,
    polygon: Polygon,
    #[serde(default)]
    pitch: Pitch,
    #[serde(default)]
    orientation: Option<Aspect>,
}

impl From<FacetInput> for Facet {
    fn from(value: FacetInput) -> Self {
        let facet = Facet::new(value.id, value.polygon, value.pitch);
        match value.orientation {
            Some(orientation) => facet.with_orientation(orientation),
            None => facet,
        }
    }
}
