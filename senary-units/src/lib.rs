//! Senary Units - measurement conversion across SI, US customary and seximal
//!
//! Thirteen dimensions, each with an SI table, a US customary table and a
//! seximal base unit:
//! - Time, Length, Area, Volume, Speed, Acceleration, Mass
//! - Force, Pressure, Work/Energy, Temperature, Frequency, Power
//!
//! Every conversion pivots through the SI canonical unit of its dimension.
//! Temperature units are affine (offset and scale); all others are
//! proportional.

mod dimension;
mod system;
mod unit;
mod units;
mod engine;
mod parse;
mod convert;

pub use dimension::Dimension;
pub use system::MeasurementSystem;
pub use unit::{UnitDefinition, SeximalBase, SeximalRoute, ConversionError};
pub use units::{units_for, unit, default_unit, is_valid_unit, list_dimensions, seximal_base};
pub use engine::{to_canonical, from_canonical, convert};
pub use parse::{parse_dimension, parse_system, parse_value};

use senary_plugin::PluginRegistry;

/// Load unit functions into registry
pub fn load_units_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Conversion (3 functions)
        .with_function(convert::Convert)
        .with_function(convert::ToCanonical)
        .with_function(convert::FromCanonical)

        // Catalogue (4 functions)
        .with_function(convert::ListDimensions)
        .with_function(convert::ListUnits)
        .with_function(convert::DefaultUnit)
        .with_function(convert::IsValidUnit)
}
