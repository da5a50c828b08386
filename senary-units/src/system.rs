//! Measurement systems

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::ConversionError;

/// One of the three unit systems a measurement can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    Si,
    Us,
    Seximal,
}

impl MeasurementSystem {
    pub const ALL: [MeasurementSystem; 3] = [
        MeasurementSystem::Si,
        MeasurementSystem::Us,
        MeasurementSystem::Seximal,
    ];

    /// Short lower-case key used in tool arguments
    pub fn key(&self) -> &'static str {
        match self {
            MeasurementSystem::Si => "si",
            MeasurementSystem::Us => "us",
            MeasurementSystem::Seximal => "seximal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MeasurementSystem::Si => "SI",
            MeasurementSystem::Us => "US Customary",
            MeasurementSystem::Seximal => "Seximal",
        }
    }

    /// Values in this system are written as base-6 numerals
    pub fn is_seximal(&self) -> bool {
        matches!(self, MeasurementSystem::Seximal)
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MeasurementSystem {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "si" | "metric" => Ok(MeasurementSystem::Si),
            "us" | "us customary" | "imperial" => Ok(MeasurementSystem::Us),
            "seximal" | "senary" | "base6" => Ok(MeasurementSystem::Seximal),
            _ => Err(ConversionError::UnknownSystem(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(MeasurementSystem::Si.to_string(), "SI");
        assert_eq!(MeasurementSystem::Us.to_string(), "US Customary");
        assert_eq!(MeasurementSystem::Seximal.to_string(), "Seximal");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("SI".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Si);
        assert_eq!("US Customary".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Us);
        assert_eq!("seximal".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Seximal);
        assert_eq!(
            "cgs".parse::<MeasurementSystem>(),
            Err(ConversionError::UnknownSystem("cgs".into()))
        );
    }
}
