//! Parsing of user-entered names and measurement values

use senary_numeral::{decode, is_valid, parse_decimal, NumeralError};
use crate::{ConversionError, Dimension, MeasurementSystem};

/// Parse a dimension key or display name (e.g. "LENGTH", "Work/Energy")
pub fn parse_dimension(s: &str) -> Result<Dimension, ConversionError> {
    s.parse()
}

/// Parse a measurement system name (e.g. "si", "US Customary", "seximal")
pub fn parse_system(s: &str) -> Result<MeasurementSystem, ConversionError> {
    s.parse()
}

/// Parse a measurement value written in the notation of `system`.
///
/// Seximal values are base-6 numerals; SI and US values are decimal.
pub fn parse_value(text: &str, system: MeasurementSystem) -> Result<f64, ConversionError> {
    let text = text.trim();
    if !system.is_seximal() {
        return Ok(parse_decimal(text)?);
    }

    if is_valid(text) {
        return Ok(decode(text)?);
    }
    // Prefer the offending digit over a generic shape error
    match decode(text) {
        Err(e) => Err(e.into()),
        Ok(_) => Err(NumeralError::InvalidNumeral(text.to_string()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!(parse_dimension("Pressure").unwrap(), Dimension::Pressure);
        assert_eq!(parse_system("us").unwrap(), MeasurementSystem::Us);
        assert!(parse_system("").is_err());
    }

    #[test]
    fn test_parse_decimal_value() {
        assert_eq!(parse_value(" 12.5 ", MeasurementSystem::Si).unwrap(), 12.5);
        assert_eq!(parse_value("-3", MeasurementSystem::Us).unwrap(), -3.0);
        assert_eq!(
            parse_value("abc", MeasurementSystem::Si),
            Err(ConversionError::Numeral(NumeralError::NumericParse("abc".into())))
        );
    }

    #[test]
    fn test_parse_seximal_value() {
        assert_eq!(parse_value("55", MeasurementSystem::Seximal).unwrap(), 35.0);
        assert_eq!(parse_value("-0.3", MeasurementSystem::Seximal).unwrap(), -0.5);
        assert_eq!(
            parse_value("56", MeasurementSystem::Seximal),
            Err(ConversionError::Numeral(NumeralError::InvalidDigit('6')))
        );
        // decode alone would accept these
        assert_eq!(
            parse_value("", MeasurementSystem::Seximal),
            Err(ConversionError::Numeral(NumeralError::InvalidNumeral("".into())))
        );
        assert_eq!(
            parse_value("5.", MeasurementSystem::Seximal),
            Err(ConversionError::Numeral(NumeralError::InvalidNumeral("5.".into())))
        );
    }
}
