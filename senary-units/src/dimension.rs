//! Physical dimensions supported by the converter
//!
//! The set is closed: every dimension has an SI table, a US table and a
//! seximal base unit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::ConversionError;

/// A kind of physical quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Time,
    Length,
    Area,
    Volume,
    Speed,
    Acceleration,
    Mass,
    Force,
    Pressure,
    Energy,
    Temperature,
    Frequency,
    Power,
}

impl Dimension {
    /// All dimensions in display order
    pub const ALL: [Dimension; 13] = [
        Dimension::Time,
        Dimension::Length,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Speed,
        Dimension::Acceleration,
        Dimension::Mass,
        Dimension::Force,
        Dimension::Pressure,
        Dimension::Energy,
        Dimension::Temperature,
        Dimension::Frequency,
        Dimension::Power,
    ];

    /// Stable upper-case key, e.g. `"ENERGY"`
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::Time => "TIME",
            Dimension::Length => "LENGTH",
            Dimension::Area => "AREA",
            Dimension::Volume => "VOLUME",
            Dimension::Speed => "SPEED",
            Dimension::Acceleration => "ACCELERATION",
            Dimension::Mass => "MASS",
            Dimension::Force => "FORCE",
            Dimension::Pressure => "PRESSURE",
            Dimension::Energy => "ENERGY",
            Dimension::Temperature => "TEMPERATURE",
            Dimension::Frequency => "FREQUENCY",
            Dimension::Power => "POWER",
        }
    }

    /// Human-readable name, e.g. `"Work/Energy"`
    pub fn display_name(&self) -> &'static str {
        match self {
            Dimension::Time => "Time",
            Dimension::Length => "Length",
            Dimension::Area => "Area",
            Dimension::Volume => "Volume",
            Dimension::Speed => "Speed",
            Dimension::Acceleration => "Acceleration",
            Dimension::Mass => "Mass",
            Dimension::Force => "Force",
            Dimension::Pressure => "Pressure",
            Dimension::Energy => "Work/Energy",
            Dimension::Temperature => "Temperature",
            Dimension::Frequency => "Frequency",
            Dimension::Power => "Power",
        }
    }

    /// Temperature is the only affine dimension
    pub fn is_temperature(&self) -> bool {
        matches!(self, Dimension::Temperature)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    /// Accepts the key or the display name, case-insensitively.
    /// `"energy"`, `"ENERGY"` and `"Work/Energy"` all name the same dimension.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| d.key().eq_ignore_ascii_case(s) || d.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::UnknownDimension(s.to_string()))
    }
}
