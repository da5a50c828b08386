//! Seximal magnitude prefixes (powers of 6)

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::NumeralError;

/// A named power-of-6 scale, the base-6 counterpart of kilo/milli
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeximalPrefix {
    Nifa,
    Kila,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Nivi,
    Milli,
    Micro,
    Nano,
    Pico,
}

impl SeximalPrefix {
    /// All prefixes in declaration order
    pub const ALL: [SeximalPrefix; 12] = [
        SeximalPrefix::Nifa,
        SeximalPrefix::Kila,
        SeximalPrefix::Mega,
        SeximalPrefix::Giga,
        SeximalPrefix::Tera,
        SeximalPrefix::Peta,
        SeximalPrefix::Exa,
        SeximalPrefix::Nivi,
        SeximalPrefix::Milli,
        SeximalPrefix::Micro,
        SeximalPrefix::Nano,
        SeximalPrefix::Pico,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SeximalPrefix::Nifa => "nifa",
            SeximalPrefix::Kila => "kila",
            SeximalPrefix::Mega => "mega",
            SeximalPrefix::Giga => "giga",
            SeximalPrefix::Tera => "tera",
            SeximalPrefix::Peta => "peta",
            SeximalPrefix::Exa => "exa",
            SeximalPrefix::Nivi => "nivi",
            SeximalPrefix::Milli => "milli",
            SeximalPrefix::Micro => "micro",
            SeximalPrefix::Nano => "nano",
            SeximalPrefix::Pico => "pico",
        }
    }

    /// Name with an upper-case first letter, used in display names
    pub fn capitalized(&self) -> String {
        let name = self.name();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Exponent of 6
    pub fn power(&self) -> i32 {
        match self {
            SeximalPrefix::Nifa => 2,
            SeximalPrefix::Kila => 4,
            SeximalPrefix::Mega => 8,
            SeximalPrefix::Giga => 12,
            SeximalPrefix::Tera => 16,
            SeximalPrefix::Peta => 20,
            SeximalPrefix::Exa => 24,
            SeximalPrefix::Nivi => -2,
            SeximalPrefix::Milli => -4,
            SeximalPrefix::Micro => -8,
            SeximalPrefix::Nano => -12,
            SeximalPrefix::Pico => -16,
        }
    }

    /// `6^power`; the integer power is exact in u64 and in f64 for every prefix
    pub fn factor(&self) -> f64 {
        let power = self.power();
        let magnitude = 6u64.pow(power.unsigned_abs()) as f64;
        if power >= 0 {
            magnitude
        } else {
            1.0 / magnitude
        }
    }
}

impl fmt::Display for SeximalPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SeximalPrefix {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeximalPrefix::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| NumeralError::UnknownPrefix(s.to_string()))
    }
}

/// A seximal unit key split into its optional prefix and base key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedUnitKey<'a> {
    pub prefix: Option<SeximalPrefix>,
    pub base_key: &'a str,
}

impl ParsedUnitKey<'_> {
    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }
}

/// Split a leading prefix name (case-insensitive, optionally followed by `-`)
/// off a unit key. Keys without a known prefix come back unchanged.
pub fn parse_with_prefix(unit_key: &str) -> ParsedUnitKey<'_> {
    for prefix in SeximalPrefix::ALL {
        let name = prefix.name();
        let matches = unit_key
            .get(..name.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(name));
        if matches {
            let rest = &unit_key[name.len()..];
            return ParsedUnitKey {
                prefix: Some(prefix),
                base_key: rest.strip_prefix('-').unwrap_or(rest),
            };
        }
    }
    ParsedUnitKey { prefix: None, base_key: unit_key }
}

/// Value in prefixed units → value in base units
pub fn apply_prefix(value: f64, prefix: SeximalPrefix) -> f64 {
    value * prefix.factor()
}

/// Value in base units → value in prefixed units
pub fn remove_prefix(value: f64, prefix: SeximalPrefix) -> f64 {
    value / prefix.factor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_match_powers_of_six() {
        assert_eq!(SeximalPrefix::Nifa.factor(), 36.0);
        assert_eq!(SeximalPrefix::Kila.factor(), 1296.0);
        assert_eq!(SeximalPrefix::Mega.factor(), 1_679_616.0);
        assert_eq!(SeximalPrefix::Giga.factor(), 2_176_782_336.0);
        assert_eq!(SeximalPrefix::Tera.factor(), 2_821_109_907_456.0);
        assert_eq!(SeximalPrefix::Peta.factor(), 3_656_158_440_062_976.0);
        assert_eq!(SeximalPrefix::Exa.factor(), 4_738_381_338_321_616_896.0);
        assert_eq!(SeximalPrefix::Nivi.factor(), 1.0 / 36.0);
        assert_eq!(SeximalPrefix::Pico.factor(), 1.0 / 2_821_109_907_456.0);
    }

    #[test]
    fn test_powers_cover_declared_range() {
        let powers: Vec<i32> = SeximalPrefix::ALL.iter().map(|p| p.power()).collect();
        assert_eq!(powers, vec![2, 4, 8, 12, 16, 20, 24, -2, -4, -8, -12, -16]);
    }

    #[test]
    fn test_parse_with_prefix() {
        let parsed = parse_with_prefix("kila-thumb");
        assert_eq!(parsed.prefix, Some(SeximalPrefix::Kila));
        assert_eq!(parsed.base_key, "thumb");

        let parsed = parse_with_prefix("MILLIheft");
        assert_eq!(parsed.prefix, Some(SeximalPrefix::Milli));
        assert_eq!(parsed.base_key, "heft");

        let parsed = parse_with_prefix("thumb");
        assert!(!parsed.has_prefix());
        assert_eq!(parsed.base_key, "thumb");

        let parsed = parse_with_prefix("nivi");
        assert_eq!(parsed.prefix, Some(SeximalPrefix::Nivi));
        assert_eq!(parsed.base_key, "");
    }

    #[test]
    fn test_parse_with_prefix_non_ascii_key() {
        let parsed = parse_with_prefix("°Ce");
        assert!(!parsed.has_prefix());
    }

    #[test]
    fn test_apply_and_remove() {
        assert_eq!(apply_prefix(2.0, SeximalPrefix::Kila), 2592.0);
        assert_eq!(remove_prefix(2592.0, SeximalPrefix::Kila), 2.0);
        for prefix in SeximalPrefix::ALL {
            for v in [1.0, -3.5, 0.123, 98765.4321] {
                let back = apply_prefix(remove_prefix(v, prefix), prefix);
                assert!((back - v).abs() <= 1e-12 * v.abs(), "{} with {}", v, prefix);
            }
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Kila".parse::<SeximalPrefix>().unwrap(), SeximalPrefix::Kila);
        assert_eq!(
            "zeta".parse::<SeximalPrefix>(),
            Err(NumeralError::UnknownPrefix("zeta".into()))
        );
    }

    #[test]
    fn test_capitalized() {
        assert_eq!(SeximalPrefix::Micro.capitalized(), "Micro");
    }
}
