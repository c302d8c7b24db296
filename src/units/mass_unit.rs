//! Mass unit types and conversion constants
//!
//! Kilograms are the canonical unit. Pounds exist only for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pounds per kilogram (fixed display constant)
pub const LBS_PER_KG: f64 = 2.20462;

/// Display unit for mass values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MassUnit {
    /// Kilograms (canonical)
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

/// Short display label for each unit
pub const UNIT_LABELS: [(MassUnit, &str); 2] = [(MassUnit::Kg, "Kg"), (MassUnit::Lbs, "Lbs")];

impl MassUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MassUnit::Kg => "kg",
            MassUnit::Lbs => "lbs",
        }
    }

    /// Short label shown next to formatted values
    pub fn label(&self) -> &'static str {
        match self {
            MassUnit::Kg => UNIT_LABELS[0].1,
            MassUnit::Lbs => UNIT_LABELS[1].1,
        }
    }

    /// Parse from string, accepting common spellings
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Some(MassUnit::Kg),
            "lb" | "lbs" | "pound" | "pounds" => Some(MassUnit::Lbs),
            _ => None,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MassUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown mass unit: {}", s))
    }
}
