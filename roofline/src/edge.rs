//! Categorized linear features of a roof.

use std::fmt::{Display, Formatter};

use roofline_types::geo::{Coordinate, GeoPoint};
use serde::{Deserialize, Serialize};

use crate::error::RooflineError;
use crate::validation::ValidationThresholds;

/// Category of a roof edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    /// Horizontal line where two roof planes meet at the top.
    Ridge,
    /// Sloped external line where two roof planes meet.
    Hip,
    /// Sloped internal line where two roof planes meet.
    Valley,
    /// Lower horizontal edge of a roof plane.
    Eave,
    /// Sloped edge of a gable.
    Rake,
    /// Line where a roof plane meets a vertical wall running up the slope.
    Step,
    /// Line where a roof plane meets a vertical wall.
    Wall,
    /// Edge of unknown category. Any unrecognized category deserializes into this value.
    #[default]
    #[serde(other)]
    Unknown,
}

impl EdgeType {
    /// Categories that have a declared total in a measurement set.
    pub const MEASURED: [EdgeType; 5] = [
        EdgeType::Ridge,
        EdgeType::Hip,
        EdgeType::Valley,
        EdgeType::Eave,
        EdgeType::Rake,
    ];

    /// Name of the category as used in serialized data.
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Ridge => "ridge",
            EdgeType::Hip => "hip",
            EdgeType::Valley => "valley",
            EdgeType::Eave => "eave",
            EdgeType::Rake => "rake",
            EdgeType::Step => "step",
            EdgeType::Wall => "wall",
            EdgeType::Unknown => "unknown",
        }
    }
}

impl Display for EdgeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A straight linear feature of a roof between two geographic points.
///
/// Deserializes from `{"type", "start", "end", "lengthFt", "facetsConnected"}`. If `lengthFt` is not given, it is
/// computed from the endpoints. A negative or non-finite length is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "EdgeSegmentInput")]
pub struct EdgeSegment {
    #[serde(rename = "type")]
    edge_type: EdgeType,
    start: Coordinate,
    end: Coordinate,
    length_ft: f64,
    facets_connected: Vec<String>,
}

impl EdgeSegment {
    /// Creates a new segment. Its length is the great-circle distance between the endpoints.
    pub fn new(edge_type: EdgeType, start: Coordinate, end: Coordinate) -> Self {
        Self {
            edge_type,
            start,
            end,
            length_ft: start.distance(&end),
            facets_connected: Vec::new(),
        }
    }

    /// Sets identifiers of the facets that share this edge.
    pub fn with_facets<I, S>(mut self, facets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facets_connected = facets.into_iter().map(Into::into).collect();
        self
    }

    /// Category of the edge.
    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    /// First endpoint.
    pub fn start(&self) -> &Coordinate {
        &self.start
    }

    /// Second endpoint.
    pub fn end(&self) -> &Coordinate {
        &self.end
    }

    /// Length of the edge in feet.
    pub fn length_ft(&self) -> f64 {
        self.length_ft
    }

    /// Identifiers of the facets that share this edge.
    pub fn facets_connected(&self) -> &[String] {
        &self.facets_connected
    }

    /// Point halfway between the endpoints.
    pub fn midpoint(&self) -> Coordinate {
        self.start.midpoint(&self.end)
    }

    /// Returns true if any endpoint of this segment is within `radius_ft` of any endpoint of `other`.
    pub fn is_connected_to(&self, other: &EdgeSegment, radius_ft: f64) -> bool {
        [&self.start, &self.end].into_iter().any(|own| {
            [&other.start, &other.end]
                .into_iter()
                .any(|theirs| own.distance(theirs) <= radius_ft)
        })
    }

    /// Returns true if the segments look like the same edge traced twice.
    ///
    /// This is a proximity test, not a collinearity test: the segments overlap if the distance between their
    /// midpoints is less than [`ValidationThresholds::overlap_midpoint_ratio`] of their average length, and their
    /// lengths differ by less than [`ValidationThresholds::overlap_length_delta_ft`].
    pub fn overlaps(&self, other: &EdgeSegment, thresholds: &ValidationThresholds) -> bool {
        let midpoint_distance = self.midpoint().distance(&other.midpoint());
        let average_length = (self.length_ft + other.length_ft) / 2.0;
        let length_delta = (self.length_ft - other.length_ft).abs();

        midpoint_distance < average_length * thresholds.overlap_midpoint_ratio
            && length_delta < thresholds.overlap_length_delta_ft
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EdgeSegmentInput {
    #[serde(rename = "type", default)]
    edge_type: EdgeType,
    start: Coordinate,
    end: Coordinate,
    #[serde(default)]
    length_ft: Option<f64>,
    #[serde(default)]
    facets_connected: Vec<String>,
}

impl TryFrom<EdgeSegmentInput> for EdgeSegment {
    type Error = RooflineError;

    fn try_from(value: EdgeSegmentInput) -> Result<Self, Self::Error> {
        let mut segment = EdgeSegment::new(value.edge_type, value.start, value.end)
            .with_facets(value.facets_connected);

        if let Some(length_ft) = value.length_ft {
            if !length_ft.is_finite() || length_ft < 0.0 {
                return Err(RooflineError::InvalidInput(format!(
                    "edge length must be a non-negative number of feet, got {length_ft}"
                )));
            }
            segment.length_ft = length_ft;
        }

        Ok(segment)
    }
}
