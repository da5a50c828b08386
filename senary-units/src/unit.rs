//! Unit representation with conversion factors

use std::borrow::Cow;
use serde::Serialize;
use thiserror::Error;
use senary_core::{codes, SenaryError};
use senary_numeral::{NumeralError, SeximalPrefix};
use crate::{Dimension, MeasurementSystem};

/// A unit belonging to one (dimension, system) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDefinition {
    /// Lookup key, unique within its dimension and system (e.g. "square meter")
    pub key: Cow<'static, str>,
    /// Display symbol (e.g. "m²")
    pub symbol: Cow<'static, str>,
    /// Display name (e.g. "Square Meter")
    pub name: Cow<'static, str>,
    /// Scale to the SI canonical unit; for seximal units, scale to the seximal base unit
    pub factor: f64,
    /// Additive term, temperature units only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
    /// Apply the offset before the factor when normalising
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pre_offset: bool,
    /// Set on generated prefixed seximal units
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<SeximalPrefix>,
}

impl UnitDefinition {
    /// Proportional unit
    pub const fn new(key: &'static str, symbol: &'static str, name: &'static str, factor: f64) -> Self {
        UnitDefinition {
            key: Cow::Borrowed(key),
            symbol: Cow::Borrowed(symbol),
            name: Cow::Borrowed(name),
            factor,
            offset: None,
            pre_offset: false,
            prefix: None,
        }
    }

    /// Affine unit: `value·factor + offset`
    pub const fn with_offset(
        key: &'static str,
        symbol: &'static str,
        name: &'static str,
        factor: f64,
        offset: f64,
    ) -> Self {
        UnitDefinition {
            key: Cow::Borrowed(key),
            symbol: Cow::Borrowed(symbol),
            name: Cow::Borrowed(name),
            factor,
            offset: Some(offset),
            pre_offset: false,
            prefix: None,
        }
    }

    /// Affine unit: `(value + offset)·factor`
    pub const fn with_pre_offset(
        key: &'static str,
        symbol: &'static str,
        name: &'static str,
        factor: f64,
        offset: f64,
    ) -> Self {
        UnitDefinition {
            key: Cow::Borrowed(key),
            symbol: Cow::Borrowed(symbol),
            name: Cow::Borrowed(name),
            factor,
            offset: Some(offset),
            pre_offset: true,
            prefix: None,
        }
    }

    /// Value in this unit → value in the reference unit
    pub fn normalise(&self, value: f64) -> f64 {
        match self.offset {
            Some(offset) if self.pre_offset => (value + offset) * self.factor,
            Some(offset) => value * self.factor + offset,
            None => value * self.factor,
        }
    }

    /// Value in the reference unit → value in this unit
    pub fn denormalise(&self, value: f64) -> f64 {
        match self.offset {
            Some(offset) if self.pre_offset => value / self.factor - offset,
            Some(offset) => (value - offset) / self.factor,
            None => value / self.factor,
        }
    }
}

/// How a seximal base unit reaches the SI canonical unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum SeximalRoute {
    /// One base unit equals `factor` SI canonical units
    ToSi { factor: f64 },
    /// One base unit equals `factor` of the named US unit
    ViaUs { factor: f64, unit: &'static str },
}

/// The base seximal unit of a dimension; all other seximal units are prefixed from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeximalBase {
    pub key: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    #[serde(flatten)]
    pub route: SeximalRoute,
}

impl SeximalBase {
    pub const fn to_si(key: &'static str, symbol: &'static str, name: &'static str, factor: f64) -> Self {
        SeximalBase { key, symbol, name, route: SeximalRoute::ToSi { factor } }
    }

    pub const fn via_us(
        key: &'static str,
        symbol: &'static str,
        name: &'static str,
        factor: f64,
        unit: &'static str,
    ) -> Self {
        SeximalBase { key, symbol, name, route: SeximalRoute::ViaUs { factor, unit } }
    }

    /// The base unit itself as a factor-1 seximal unit definition
    pub fn definition(&self) -> UnitDefinition {
        UnitDefinition::new(self.key, self.symbol, self.name, 1.0)
    }

    /// A generated prefixed unit, e.g. `kila-thumb` / `kilathm` / `Kila-Thumb`
    pub fn prefixed(&self, prefix: SeximalPrefix) -> UnitDefinition {
        UnitDefinition {
            key: Cow::Owned(format!("{}-{}", prefix.name(), self.key)),
            symbol: Cow::Owned(format!("{}{}", prefix.name(), self.symbol)),
            name: Cow::Owned(format!("{}-{}", prefix.capitalized(), self.name)),
            factor: prefix.factor(),
            offset: None,
            pre_offset: false,
            prefix: Some(prefix),
        }
    }
}

/// Error type for unit lookup and conversion
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("Unit '{unit}' not found for {dimension} in {system}")]
    UnknownUnit {
        unit: String,
        dimension: Dimension,
        system: MeasurementSystem,
    },

    #[error("Unknown measurement system: '{0}'")]
    UnknownSystem(String),

    #[error("Unknown dimension: '{0}'")]
    UnknownDimension(String),

    #[error("No seximal base unit defined for {0}")]
    UnsupportedDimension(Dimension),

    #[error(transparent)]
    Numeral(#[from] NumeralError),
}

impl From<ConversionError> for SenaryError {
    fn from(err: ConversionError) -> Self {
        let message = err.to_string();
        match err {
            ConversionError::UnknownUnit { dimension, system, .. } => {
                SenaryError::new(codes::UNKNOWN_UNIT, message).with_suggestion(format!(
                    "Use list_units(\"{}\", \"{}\") to see the available units",
                    dimension.key(),
                    system.key()
                ))
            }
            ConversionError::UnknownSystem(_) => SenaryError::new(codes::UNKNOWN_SYSTEM, message)
                .with_suggestion("Use 'si', 'us' or 'seximal'"),
            ConversionError::UnknownDimension(_) => SenaryError::new(codes::UNKNOWN_DIMENSION, message)
                .with_suggestion("Use list_dimensions() to see the supported dimensions"),
            ConversionError::UnsupportedDimension(_) => {
                SenaryError::new(codes::UNSUPPORTED_DIMENSION, message)
            }
            ConversionError::Numeral(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proportional() {
        let foot = UnitDefinition::new("foot", "ft", "Foot", 0.3048);
        assert!((foot.normalise(10.0) - 3.048).abs() < 1e-12);
        assert!((foot.denormalise(3.048) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_offsets() {
        let kelvin = UnitDefinition::with_offset("kelvin", "K", "Kelvin", 1.0, -273.15);
        assert!((kelvin.normalise(273.15)).abs() < 1e-12);
        assert!((kelvin.denormalise(0.0) - 273.15).abs() < 1e-12);

        let fahrenheit = UnitDefinition::with_pre_offset("fahrenheit", "°F", "Fahrenheit", 5.0 / 9.0, -32.0);
        assert!((fahrenheit.normalise(212.0) - 100.0).abs() < 1e-12);
        assert!((fahrenheit.denormalise(0.0) - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_prefixed_unit() {
        let thumb = SeximalBase::via_us("thumb", "thm", "Thumb", 2.29867, "inch");
        let unit = thumb.prefixed(SeximalPrefix::Kila);
        assert_eq!(unit.key, "kila-thumb");
        assert_eq!(unit.symbol, "kilathm");
        assert_eq!(unit.name, "Kila-Thumb");
        assert_eq!(unit.factor, 1296.0);
        assert_eq!(unit.prefix, Some(SeximalPrefix::Kila));
    }

    #[test]
    fn test_into_senary_error() {
        let err: SenaryError = ConversionError::UnknownUnit {
            unit: "furlong".into(),
            dimension: Dimension::Length,
            system: MeasurementSystem::Us,
        }
        .into();
        assert_eq!(err.code, codes::UNKNOWN_UNIT);
        assert_eq!(err.message, "Unit 'furlong' not found for Length in US Customary");
        assert!(err.suggestion.unwrap().contains("list_units"));

        let err: SenaryError = ConversionError::from(NumeralError::InvalidDigit('8')).into();
        assert_eq!(err.code, codes::INVALID_DIGIT);
    }
}
