//! Seximal numeral codec
//!
//! Converts between `f64` values and base-6 digit strings of the form
//! `-?[0-5]+(\.[0-5]+)?`. Encoding is bounded by a fractional precision and
//! therefore lossy for values whose base-6 expansion does not terminate.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use regex::Regex;
use serde::{Deserialize, Serialize};
use crate::NumeralError;

static SEXIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-5]+(\.[0-5]+)?$").expect("seximal pattern compiles")
});

const RADIX: f64 = 6.0;

/// Largest integer below which every f64 integer is exact
const EXACT_INT_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Encode a value as a seximal numeral with at most `precision` fractional digits.
///
/// Fractional digits are truncated, not rounded, and trailing zeros are
/// stripped. A value that encodes to all zeros is returned as `"0"` without
/// a sign.
pub fn encode(value: f64, precision: u32) -> Result<String, NumeralError> {
    if !value.is_finite() {
        return Err(NumeralError::NonFinite);
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }

    let negative = value < 0.0;
    let magnitude = value.abs();
    let integer_part = magnitude.floor();

    let mut integer_digits = Vec::new();
    let mut rest = integer_part;
    while rest > 0.0 {
        integer_digits.push(digit_char(rest % RADIX));
        rest = (rest / RADIX).floor();
    }
    if integer_digits.is_empty() {
        integer_digits.push('0');
    }
    let integer_digits: String = integer_digits.into_iter().rev().collect();

    let mut fraction = magnitude - integer_part;
    let mut fraction_digits = String::new();
    let mut count = 0;
    while fraction > 0.0 && count < precision {
        fraction *= RADIX;
        let digit = fraction.floor();
        fraction_digits.push(digit_char(digit));
        fraction -= digit;
        count += 1;
    }
    let fraction_digits = fraction_digits.trim_end_matches('0');

    if integer_digits == "0" && fraction_digits.is_empty() {
        return Ok("0".to_string());
    }

    let mut result = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if negative {
        result.push('-');
    }
    result.push_str(&integer_digits);
    if !fraction_digits.is_empty() {
        result.push('.');
        result.push_str(fraction_digits);
    }
    Ok(result)
}

/// Decode a seximal numeral.
///
/// The empty string and `"0"` decode to zero. Any digit outside 0-5 fails with
/// `InvalidDigit`; a second `.` fails with `InvalidNumeral`.
pub fn decode(numeral: &str) -> Result<f64, NumeralError> {
    if numeral.is_empty() || numeral == "0" {
        return Ok(0.0);
    }

    let (negative, digits) = match numeral.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, numeral),
    };

    let mut parts = digits.split('.');
    let integer_part = parts.next().unwrap_or("");
    let fraction_part = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(NumeralError::InvalidNumeral(numeral.to_string()));
    }

    // Horner's scheme keeps every partial sum an exact integer while it fits
    let mut integer = 0.0;
    for c in integer_part.chars() {
        integer = integer * RADIX + digit_value(c)?;
    }

    let mut fraction = 0.0;
    let mut scale = 1.0;
    for c in fraction_part.chars() {
        let digit = digit_value(c)?;
        if fraction * RADIX < EXACT_INT_LIMIT {
            fraction = fraction * RADIX + digit;
            scale *= RADIX;
        }
        // further digits are below f64 resolution
    }

    let magnitude = integer + fraction / scale;
    // "-0" is plain zero
    Ok(if negative && magnitude != 0.0 { -magnitude } else { magnitude })
}

/// True iff `s` is a well-formed seximal numeral. The empty string is invalid.
pub fn is_valid(s: &str) -> bool {
    SEXIMAL_PATTERN.is_match(s)
}

/// Normalise a numeral by decoding and re-encoding it
pub fn format_seximal(numeral: &str, precision: u32) -> Result<String, NumeralError> {
    if numeral.is_empty() {
        return Ok("0".to_string());
    }
    encode(decode(numeral)?, precision)
}

/// Parse a base-10 literal, rejecting anything that is not a finite number
pub fn parse_decimal(text: &str) -> Result<f64, NumeralError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(NumeralError::NumericParse(text.to_string())),
    }
}

/// Positional notation of a number literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberBase {
    Decimal,
    Seximal,
}

impl NumberBase {
    pub fn name(&self) -> &'static str {
        match self {
            NumberBase::Decimal => "decimal",
            NumberBase::Seximal => "seximal",
        }
    }
}

impl fmt::Display for NumberBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NumberBase {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "decimal" | "dec" | "base10" | "base-10" | "10" => Ok(NumberBase::Decimal),
            "seximal" | "senary" | "base6" | "base-6" | "6" => Ok(NumberBase::Seximal),
            _ => Err(NumeralError::UnknownBase(s.to_string())),
        }
    }
}

/// Convert a number literal between decimal and seximal notation
pub fn convert_base(text: &str, from: NumberBase, to: NumberBase, precision: u32) -> Result<String, NumeralError> {
    match (from, to) {
        (NumberBase::Decimal, NumberBase::Decimal) | (NumberBase::Seximal, NumberBase::Seximal) => {
            Ok(text.to_string())
        }
        (NumberBase::Decimal, NumberBase::Seximal) => encode(parse_decimal(text)?, precision),
        (NumberBase::Seximal, NumberBase::Decimal) => {
            if !is_valid(text) {
                return Err(NumeralError::InvalidNumeral(text.to_string()));
            }
            Ok(decode(text)?.to_string())
        }
    }
}

fn digit_char(digit: f64) -> char {
    // digit is always an integer in 0..6 here
    char::from(b'0' + digit as u8)
}

fn digit_value(c: char) -> Result<f64, NumeralError> {
    match c.to_digit(10) {
        Some(d) if d < 6 => Ok(d as f64),
        _ => Err(NumeralError::InvalidDigit(c)),
    }
}
