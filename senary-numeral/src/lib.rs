//! Senary Numeral - base-6 number literals
//!
//! - Encoding `f64` values as seximal numerals with bounded precision
//! - Decoding and validating numerals (`-?[0-5]+(\.[0-5]+)?`)
//! - Decimal/seximal literal conversion
//! - The twelve seximal magnitude prefixes (nifa = 6², kila = 6⁴, ...)

mod error;
mod numeral;
mod prefix;
mod functions;

pub use error::NumeralError;
pub use numeral::{encode, decode, is_valid, format_seximal, parse_decimal, convert_base, NumberBase};
pub use prefix::{SeximalPrefix, ParsedUnitKey, parse_with_prefix, apply_prefix, remove_prefix};

use senary_plugin::PluginRegistry;

/// Load seximal numeral functions into registry
pub fn load_numeral_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Codec (4 functions)
        .with_function(functions::ToSeximal)
        .with_function(functions::FromSeximal)
        .with_function(functions::IsSeximal)
        .with_function(functions::FormatSeximal)

        // Literals (1 function)
        .with_function(functions::ConvertBase)

        // Prefixes (3 functions)
        .with_function(functions::ApplyPrefix)
        .with_function(functions::RemovePrefix)
        .with_function(functions::ListPrefixes)
}
