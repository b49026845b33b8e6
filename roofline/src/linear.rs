//! Aggregation of edge lengths per category.

use serde::{Deserialize, Serialize};

use crate::edge::{EdgeSegment, EdgeType};

/// Total length in feet of the edges of every category.
///
/// ```
/// use roofline::{EdgeType, LinearTotals};
///
/// let mut totals = LinearTotals::default();
/// totals.add(EdgeType::Ridge, 30.0);
/// totals.add(EdgeType::Hip, 12.0);
/// totals.add(EdgeType::Hip, 12.0);
///
/// assert_eq!(totals.get(EdgeType::Hip), 24.0);
/// assert_eq!(totals.hips_and_ridges(), 54.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearTotals {
    /// Ridges.
    pub ridge: f64,
    /// Hips.
    pub hip: f64,
    /// Valleys.
    pub valley: f64,
    /// Eaves.
    pub eave: f64,
    /// Rakes.
    pub rake: f64,
    /// Step flashing.
    pub step: f64,
    /// Wall flashing.
    pub wall: f64,
    /// Edges of unknown category.
    pub unknown: f64,
}

impl LinearTotals {
    /// Adds length to the total of the category.
    pub fn add(&mut self, edge_type: EdgeType, length_ft: f64) {
        *self.get_mut(edge_type) += length_ft;
    }

    /// Total length of the category.
    pub fn get(&self, edge_type: EdgeType) -> f64 {
        match edge_type {
            EdgeType::Ridge => self.ridge,
            EdgeType::Hip => self.hip,
            EdgeType::Valley => self.valley,
            EdgeType::Eave => self.eave,
            EdgeType::Rake => self.rake,
            EdgeType::Step => self.step,
            EdgeType::Wall => self.wall,
            EdgeType::Unknown => self.unknown,
        }
    }

    fn get_mut(&mut self, edge_type: EdgeType) -> &mut f64 {
        match edge_type {
            EdgeType::Ridge => &mut self.ridge,
            EdgeType::Hip => &mut self.hip,
            EdgeType::Valley => &mut self.valley,
            EdgeType::Eave => &mut self.eave,
            EdgeType::Rake => &mut self.rake,
            EdgeType::Step => &mut self.step,
            EdgeType::Wall => &mut self.wall,
            EdgeType::Unknown => &mut self.unknown,
        }
    }

    /// Hips plus ridges.
    pub fn hips_and_ridges(&self) -> f64 {
        self.hip + self.ridge
    }

    /// Eaves plus rakes.
    pub fn eaves_and_rakes(&self) -> f64 {
        self.eave + self.rake
    }

    /// Sum of the categories listed in [`EdgeType::MEASURED`].
    pub fn measured_total(&self) -> f64 {
        EdgeType::MEASURED.iter().map(|t| self.get(*t)).sum()
    }

    /// Sum of every category, including step, wall and unknown edges.
    pub fn total(&self) -> f64 {
        self.measured_total() + self.step + self.wall + self.unknown
    }
}

impl<'a> Extend<&'a EdgeSegment> for LinearTotals {
    fn extend<T: IntoIterator<Item = &'a EdgeSegment>>(&mut self, iter: T) {
        for segment in iter {
            self.add(segment.edge_type(), segment.length_ft());
        }
    }
}

impl<'a> FromIterator<&'a EdgeSegment> for LinearTotals {
    fn from_iter<T: IntoIterator<Item = &'a EdgeSegment>>(iter: T) -> Self {
        let mut totals = Self::default();
        totals.extend(iter);
        totals
    }
}
