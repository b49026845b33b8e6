//! Measurement sets: everything measured on one roof.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::edge::{EdgeSegment, EdgeType};
use crate::error::RooflineError;
use crate::facet::Facet;
use crate::linear::LinearTotals;
use crate::pitch::Pitch;
use crate::validation::{ValidationPipeline, ValidationResult};
use crate::Polygon;

/// Independently obtained reference measurements of a roof.
///
/// Any subset of the values can be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroundTruth {
    /// Roof surface area in square feet.
    pub total_area: Option<f64>,
    /// Total ridge length in feet.
    pub ridge_total: Option<f64>,
    /// Total hip length in feet.
    pub hip_total: Option<f64>,
    /// Total valley length in feet.
    pub valley_total: Option<f64>,
    /// Total eave length in feet.
    pub eave_total: Option<f64>,
    /// Total rake length in feet.
    pub rake_total: Option<f64>,
}

impl GroundTruth {
    /// Reference length of the edge category, if given.
    pub fn linear(&self, edge_type: EdgeType) -> Option<f64> {
        match edge_type {
            EdgeType::Ridge => self.ridge_total,
            EdgeType::Hip => self.hip_total,
            EdgeType::Valley => self.valley_total,
            EdgeType::Eave => self.eave_total,
            EdgeType::Rake => self.rake_total,
            EdgeType::Step | EdgeType::Wall | EdgeType::Unknown => None,
        }
    }

    /// Given reference lengths with their categories.
    pub fn linear_entries(&self) -> impl Iterator<Item = (EdgeType, f64)> + '_ {
        EdgeType::MEASURED
            .into_iter()
            .filter_map(|edge_type| self.linear(edge_type).map(|value| (edge_type, value)))
    }

    /// Returns true if at least one reference length is given.
    pub fn has_linear(&self) -> bool {
        self.linear_entries().next().is_some()
    }
}

/// All measurements of one roof: facets, traced edges, the outline and the declared totals.
///
/// The declared totals are kept separately from the parts they are computed from, because validation checks that
/// they agree. Use [`MeasurementSet::assemble`] to compute the totals from the parts.
///
/// Missing fields of a serialized set take their default (empty or zero) values, and are reported by validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeasurementSet {
    /// Roof facets.
    pub facets: Vec<Facet>,
    /// Traced edges.
    pub linear_features: Vec<EdgeSegment>,
    /// Declared roof surface area in square feet.
    pub total_area: f64,
    /// Declared ridge length in feet.
    pub ridge_total: f64,
    /// Declared hip length in feet.
    pub hip_total: f64,
    /// Declared valley length in feet.
    pub valley_total: f64,
    /// Declared eave length in feet.
    pub eave_total: f64,
    /// Declared rake length in feet.
    pub rake_total: f64,
    /// Predominant pitch of the roof.
    pub pitch: Pitch,
    /// Outline of the whole roof.
    pub perimeter: Polygon,
    /// Reference measurements to audit the set against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ground_truth: Option<GroundTruth>,
}

impl MeasurementSet {
    /// Creates a measurement set with totals computed from the facets and edges.
    ///
    /// Total area is the sum of the pitch adjusted facet areas.
    pub fn assemble(
        facets: Vec<Facet>,
        linear_features: Vec<EdgeSegment>,
        perimeter: Polygon,
        pitch: Pitch,
    ) -> Self {
        let totals: LinearTotals = linear_features.iter().collect();
        let total_area: f64 = facets.iter().map(Facet::adjusted_area_sqft).sum();

        Self {
            facets,
            linear_features,
            total_area,
            ridge_total: totals.ridge,
            hip_total: totals.hip,
            valley_total: totals.valley,
            eave_total: totals.eave,
            rake_total: totals.rake,
            pitch,
            perimeter,
            ground_truth: None,
        }
    }

    /// Sets the reference measurements.
    pub fn with_ground_truth(mut self, ground_truth: GroundTruth) -> Self {
        self.ground_truth = Some(ground_truth);
        self
    }

    /// Parses a measurement set from JSON.
    ///
    /// Fails if the document is malformed or contains invalid coordinates or edges.
    pub fn from_json(json: &str) -> Result<Self, RooflineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sum of the pitch adjusted facet areas in square feet.
    pub fn facet_area_sum(&self) -> f64 {
        self.facets.iter().map(Facet::adjusted_area_sqft).sum()
    }

    /// Lengths of the traced edges per category.
    pub fn linear_totals(&self) -> LinearTotals {
        self.linear_features.iter().collect()
    }

    /// Declared total length of the category. Categories without a declared total give 0.
    pub fn declared_total(&self, edge_type: EdgeType) -> f64 {
        match edge_type {
            EdgeType::Ridge => self.ridge_total,
            EdgeType::Hip => self.hip_total,
            EdgeType::Valley => self.valley_total,
            EdgeType::Eave => self.eave_total,
            EdgeType::Rake => self.rake_total,
            EdgeType::Step | EdgeType::Wall | EdgeType::Unknown => 0.0,
        }
    }

    /// Sum of all declared linear totals.
    pub fn declared_linear_total(&self) -> f64 {
        EdgeType::MEASURED
            .iter()
            .map(|edge_type| self.declared_total(*edge_type))
            .sum()
    }

    /// Total area in roofing squares (100 square feet each).
    pub fn total_squares(&self) -> f64 {
        self.total_area / 100.0
    }

    /// Pitch adjusted facet area per facet pitch.
    pub fn area_by_pitch(&self) -> BTreeMap<Pitch, f64> {
        let mut areas = BTreeMap::new();
        for facet in &self.facets {
            *areas.entry(facet.pitch().clone()).or_insert(0.0) += facet.adjusted_area_sqft();
        }
        areas
    }

    /// Facet pitch that covers the largest area, or `None` if there are no facets.
    pub fn predominant_pitch(&self) -> Option<Pitch> {
        self.area_by_pitch()
            .into_iter()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(pitch, _)| pitch)
    }

    /// Validates the set with the default thresholds.
    pub fn validate(&self) -> ValidationResult {
        ValidationPipeline::new().validate(self)
    }
}
