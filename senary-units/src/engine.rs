//! Conversion engine
//!
//! Every conversion pivots through the SI canonical unit of its dimension.
//! Seximal units reach that pivot through their base unit, either directly
//! or by way of a US customary unit.

use senary_numeral::{apply_prefix, remove_prefix};
use crate::units::{seximal_base, unit};
use crate::{ConversionError, Dimension, MeasurementSystem, SeximalRoute};

/// Value in `unit_key` → value in the SI canonical unit
pub fn to_canonical(
    value: f64,
    dimension: Dimension,
    unit_key: &str,
    system: MeasurementSystem,
) -> Result<f64, ConversionError> {
    match system {
        MeasurementSystem::Si | MeasurementSystem::Us => {
            Ok(unit(dimension, system, unit_key)?.normalise(value))
        }
        MeasurementSystem::Seximal => {
            let base = seximal_base(dimension).ok_or(ConversionError::UnsupportedDimension(dimension))?;
            let definition = unit(dimension, system, unit_key)?;

            let base_value = match definition.prefix {
                Some(prefix) => apply_prefix(value, prefix),
                None => value,
            };

            // celce is degree-for-degree celsius
            if dimension.is_temperature() {
                return Ok(base_value);
            }

            match base.route {
                SeximalRoute::ToSi { factor } => Ok(base_value * factor),
                SeximalRoute::ViaUs { factor, unit: us_unit } => {
                    to_canonical(base_value * factor, dimension, us_unit, MeasurementSystem::Us)
                }
            }
        }
    }
}

/// Value in the SI canonical unit → value in `unit_key`
pub fn from_canonical(
    si_value: f64,
    dimension: Dimension,
    unit_key: &str,
    system: MeasurementSystem,
) -> Result<f64, ConversionError> {
    match system {
        MeasurementSystem::Si | MeasurementSystem::Us => {
            Ok(unit(dimension, system, unit_key)?.denormalise(si_value))
        }
        MeasurementSystem::Seximal => {
            let base = seximal_base(dimension).ok_or(ConversionError::UnsupportedDimension(dimension))?;
            let definition = unit(dimension, system, unit_key)?;

            let base_value = if dimension.is_temperature() {
                si_value
            } else {
                match base.route {
                    SeximalRoute::ToSi { factor } => si_value / factor,
                    SeximalRoute::ViaUs { factor, unit: us_unit } => {
                        from_canonical(si_value, dimension, us_unit, MeasurementSystem::Us)? / factor
                    }
                }
            };

            Ok(match definition.prefix {
                Some(prefix) => remove_prefix(base_value, prefix),
                None => base_value,
            })
        }
    }
}

/// Convert a value between any two units of the same dimension
pub fn convert(
    value: f64,
    dimension: Dimension,
    from_unit: &str,
    from_system: MeasurementSystem,
    to_unit: &str,
    to_system: MeasurementSystem,
) -> Result<f64, ConversionError> {
    let si_value = to_canonical(value, dimension, from_unit, from_system)?;
    from_canonical(si_value, dimension, to_unit, to_system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::units_for;

    const SAMPLES: [f64; 5] = [1.0, 42.5, -17.25, 0.003, 1.0e6];

    fn assert_close(actual: f64, expected: f64, context: &str) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{}: expected {}, got {}", context, expected, actual
        );
    }

    #[test]
    fn test_meter_to_foot() {
        let feet = convert(100.0, Dimension::Length, "meter", MeasurementSystem::Si, "foot", MeasurementSystem::Us).unwrap();
        assert!((feet - 328.084).abs() < 1e-3);
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        let f = convert(0.0, Dimension::Temperature, "celsius", MeasurementSystem::Si, "fahrenheit", MeasurementSystem::Us).unwrap();
        assert_eq!(f, 32.0);

        let f = convert(100.0, Dimension::Temperature, "celsius", MeasurementSystem::Si, "fahrenheit", MeasurementSystem::Us).unwrap();
        assert_close(f, 212.0, "boiling point");

        let c = convert(0.0, Dimension::Temperature, "kelvin", MeasurementSystem::Si, "celsius", MeasurementSystem::Si).unwrap();
        assert_close(c, -273.15, "absolute zero");
    }

    #[test]
    fn test_rankine_quirk() {
        // 9 °R → 9·5/9 − 273.15 °C
        let c = to_canonical(9.0, Dimension::Temperature, "rankine", MeasurementSystem::Us).unwrap();
        assert_close(c, -268.15, "rankine");
    }

    #[test]
    fn test_thumb_to_inch() {
        let inches = convert(1.0, Dimension::Length, "thumb", MeasurementSystem::Seximal, "inch", MeasurementSystem::Us).unwrap();
        assert!((inches - 2.29867).abs() < 1e-9);

        let inches = convert(1.0, Dimension::Length, "kila-thumb", MeasurementSystem::Seximal, "inch", MeasurementSystem::Us).unwrap();
        assert_close(inches, 1296.0 * 2.29867, "kila-thumb");
    }

    #[test]
    fn test_presh_goes_through_psi() {
        let pascals = to_canonical(1.0, Dimension::Pressure, "presh", MeasurementSystem::Seximal).unwrap();
        assert_close(pascals, 0.08304 * 6894.76, "presh");
    }

    #[test]
    fn test_seximal_to_si_route() {
        let seconds = to_canonical(1.0, Dimension::Time, "instant", MeasurementSystem::Seximal).unwrap();
        assert_close(seconds, 0.07716, "instant");

        let instants = from_canonical(0.07716 * 36.0, Dimension::Time, "nifa-instant", MeasurementSystem::Seximal).unwrap();
        assert_close(instants, 1.0, "nifa-instant");
    }

    #[test]
    fn test_celce_is_celsius() {
        let c = to_canonical(37.0, Dimension::Temperature, "celce", MeasurementSystem::Seximal).unwrap();
        assert_eq!(c, 37.0);
        let ce = convert(212.0, Dimension::Temperature, "fahrenheit", MeasurementSystem::Us, "celce", MeasurementSystem::Seximal).unwrap();
        assert_close(ce, 100.0, "celce");
    }

    #[test]
    fn test_round_trip_every_unit() {
        for dimension in Dimension::ALL {
            for system in MeasurementSystem::ALL {
                for definition in units_for(dimension, system) {
                    for v in SAMPLES {
                        let si = to_canonical(v, dimension, &definition.key, system).unwrap();
                        let back = from_canonical(si, dimension, &definition.key, system).unwrap();
                        let context = format!("{} {} {}", dimension, system, definition.key);
                        assert_close(back, v, &context);
                    }
                }
            }
        }
    }

    #[test]
    fn test_cross_system_round_trip() {
        for dimension in Dimension::ALL {
            for from in MeasurementSystem::ALL {
                for to in MeasurementSystem::ALL {
                    let from_unit = crate::units::default_unit(dimension, from).unwrap();
                    let to_unit = crate::units::default_unit(dimension, to).unwrap();
                    for v in SAMPLES {
                        let there = convert(v, dimension, &from_unit, from, &to_unit, to).unwrap();
                        let back = convert(there, dimension, &to_unit, to, &from_unit, from).unwrap();
                        let context = format!("{} {} -> {}", dimension, from, to);
                        assert_close(back, v, &context);
                    }
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        let err = convert(1.0, Dimension::Length, "furlong", MeasurementSystem::Us, "meter", MeasurementSystem::Si).unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                unit: "furlong".into(),
                dimension: Dimension::Length,
                system: MeasurementSystem::Us,
            }
        );

        let err = to_canonical(1.0, Dimension::Mass, "kila-thumb", MeasurementSystem::Seximal).unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    }
}
