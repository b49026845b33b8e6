//! Roof pitch and the slope multipliers derived from it.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Multiplier used for pitch values that are not in [`PITCH_MULTIPLIERS`]. Equals the multiplier of `6/12`.
pub const DEFAULT_PITCH_MULTIPLIER: f64 = 1.118;

/// Ratio between the surface area of a plane with the given pitch and its plan view footprint.
///
/// Values approximate `1 / cos(atan(rise / 12))`.
pub const PITCH_MULTIPLIERS: [(&str, f64); 21] = [
    ("flat", 1.000),
    ("1/12", 1.003),
    ("2/12", 1.014),
    ("3/12", 1.031),
    ("4/12", 1.054),
    ("5/12", 1.083),
    ("6/12", 1.118),
    ("7/12", 1.158),
    ("8/12", 1.202),
    ("9/12", 1.250),
    ("10/12", 1.302),
    ("11/12", 1.357),
    ("12/12", 1.414),
    ("13/12", 1.474),
    ("14/12", 1.537),
    ("15/12", 1.601),
    ("16/12", 1.667),
    ("17/12", 1.734),
    ("18/12", 1.803),
    ("19/12", 1.873),
    ("20/12", 1.943),
];

const FLAT: &str = "flat";

/// Roof pitch in the `rise/12` notation, e.g. `"6/12"`, or `"flat"`.
///
/// The value is kept exactly as it was traced. Nothing is rejected at construction: a pitch that cannot be parsed
/// has a rise of 0 and uses the [`DEFAULT_PITCH_MULTIPLIER`] for area correction, and range violations are reported
/// by validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pitch(String);

impl Pitch {
    /// Creates a pitch from its textual representation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Pitch of a flat roof.
    pub fn flat() -> Self {
        Self(FLAT.to_string())
    }

    /// Creates a `rise/12` pitch.
    pub fn from_rise(rise: u32) -> Self {
        if rise == 0 {
            Self::flat()
        } else {
            Self(format!("{rise}/12"))
        }
    }

    /// Textual representation of the pitch.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numerator of the pitch ratio.
    ///
    /// `"flat"` and values that cannot be parsed give 0.
    pub fn rise(&self) -> f64 {
        let value = self.0.trim();
        if value.eq_ignore_ascii_case(FLAT) {
            return 0.0;
        }

        let numerator = value.split('/').next().unwrap_or_default().trim();
        match numerator.parse::<f64>() {
            Ok(rise) if rise.is_finite() => rise,
            _ => 0.0,
        }
    }

    /// Returns true if the pitch is one of the values of the multiplier table.
    pub fn is_known(&self) -> bool {
        self.lookup().is_some()
    }

    /// Slope multiplier of the pitch. Unknown values give [`DEFAULT_PITCH_MULTIPLIER`].
    pub fn multiplier(&self) -> f64 {
        self.lookup().unwrap_or(DEFAULT_PITCH_MULTIPLIER)
    }

    /// Surface area of a roof plane with this pitch and the given plan view area.
    pub fn adjusted_area(&self, flat_area: f64) -> f64 {
        flat_area * self.multiplier()
    }

    fn lookup(&self) -> Option<f64> {
        let key = self.0.trim().to_ascii_lowercase();
        let key = if key == "0/12" { FLAT } else { key.as_str() };

        PITCH_MULTIPLIERS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, multiplier)| *multiplier)
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self::flat()
    }
}

impl From<&str> for Pitch {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Pitch {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Display for Pitch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
