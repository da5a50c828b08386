//! Numeral errors

use senary_core::{codes, SenaryError};
use thiserror::Error;

/// Error type for numeral parsing and encoding
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumeralError {
    #[error("Invalid seximal digit: {0}. Seximal uses only digits 0-5.")]
    InvalidDigit(char),

    #[error("Invalid seximal numeral: '{0}'")]
    InvalidNumeral(String),

    #[error("Not a decimal number: '{0}'")]
    NumericParse(String),

    #[error("Cannot encode a non-finite value")]
    NonFinite,

    #[error("Unknown seximal prefix: '{0}'")]
    UnknownPrefix(String),

    #[error("Unknown number base: '{0}'")]
    UnknownBase(String),
}

impl From<NumeralError> for SenaryError {
    fn from(err: NumeralError) -> Self {
        let message = err.to_string();
        match err {
            NumeralError::InvalidDigit(_) => SenaryError::new(codes::INVALID_DIGIT, message)
                .with_suggestion("Seximal numerals use only the digits 0 to 5"),
            NumeralError::InvalidNumeral(_) => SenaryError::new(codes::INVALID_NUMERAL, message)
                .with_suggestion("Expected digits 0-5 with an optional leading '-' and one '.'"),
            NumeralError::NumericParse(_) => SenaryError::new(codes::NUMERIC_PARSE, message)
                .with_suggestion("Enter a decimal number such as 12.5 or -3"),
            NumeralError::NonFinite => SenaryError::new(codes::NON_FINITE, message),
            NumeralError::UnknownPrefix(_) => SenaryError::new(codes::UNKNOWN_PREFIX, message)
                .with_suggestion("Use list_prefixes to see the seximal prefixes"),
            NumeralError::UnknownBase(_) => SenaryError::new(codes::UNKNOWN_BASE, message)
                .with_suggestion("Use 'decimal' or 'seximal'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            NumeralError::InvalidDigit('7').to_string(),
            "Invalid seximal digit: 7. Seximal uses only digits 0-5."
        );
        assert_eq!(NumeralError::UnknownPrefix("zeta".into()).to_string(), "Unknown seximal prefix: 'zeta'");
    }

    #[test]
    fn test_into_senary_error() {
        let err: SenaryError = NumeralError::InvalidDigit('9').into();
        assert_eq!(err.code, codes::INVALID_DIGIT);
        assert!(err.suggestion.is_some());

        let err: SenaryError = NumeralError::NumericParse("abc".into()).into();
        assert_eq!(err.code, codes::NUMERIC_PARSE);
    }
}
