//! Unit tables for the SI, US customary and seximal systems
//!
//! SI and US units are static tables. Seximal units are generated on demand
//! from each dimension's base unit and the twelve seximal prefixes.

use senary_numeral::{parse_with_prefix, SeximalPrefix};
use crate::{ConversionError, Dimension, MeasurementSystem, SeximalBase, UnitDefinition};

type U = UnitDefinition;

// ============ SI ============

static SI_TIME: [U; 7] = [
    U::new("second", "s", "Second", 1.0),
    U::new("millisecond", "ms", "Millisecond", 0.001),
    U::new("minute", "min", "Minute", 60.0),
    U::new("hour", "h", "Hour", 3600.0),
    U::new("day", "d", "Day", 86400.0),
    U::new("week", "wk", "Week", 604800.0),
    U::new("year", "yr", "Year", 31557600.0),
];

static SI_LENGTH: [U; 7] = [
    U::new("meter", "m", "Meter", 1.0),
    U::new("millimeter", "mm", "Millimeter", 0.001),
    U::new("centimeter", "cm", "Centimeter", 0.01),
    U::new("decimeter", "dm", "Decimeter", 0.1),
    U::new("kilometer", "km", "Kilometer", 1000.0),
    U::new("micrometer", "μm", "Micrometer", 0.000001),
    U::new("nanometer", "nm", "Nanometer", 0.000000001),
];

static SI_AREA: [U; 5] = [
    U::new("square meter", "m²", "Square Meter", 1.0),
    U::new("square millimeter", "mm²", "Square Millimeter", 0.000001),
    U::new("square centimeter", "cm²", "Square Centimeter", 0.0001),
    U::new("square kilometer", "km²", "Square Kilometer", 1000000.0),
    U::new("hectare", "ha", "Hectare", 10000.0),
];

// kiloliter carries factor 1, not 1000
static SI_VOLUME: [U; 6] = [
    U::new("cubic meter", "m³", "Cubic Meter", 1.0),
    U::new("liter", "L", "Liter", 0.001),
    U::new("milliliter", "mL", "Milliliter", 0.000001),
    U::new("cubic centimeter", "cm³", "Cubic Centimeter", 0.000001),
    U::new("cubic millimeter", "mm³", "Cubic Millimeter", 0.000000001),
    U::new("kiloliter", "kL", "Kiloliter", 1.0),
];

static SI_SPEED: [U; 4] = [
    U::new("meter per second", "m/s", "Meter per Second", 1.0),
    U::new("kilometer per hour", "km/h", "Kilometer per Hour", 0.27777777777778),
    U::new("meter per minute", "m/min", "Meter per Minute", 0.016666666666667),
    U::new("centimeter per second", "cm/s", "Centimeter per Second", 0.01),
];

static SI_ACCELERATION: [U; 4] = [
    U::new("meter per second squared", "m/s²", "Meter per Second Squared", 1.0),
    U::new("kilometer per hour squared", "km/h²", "Kilometer per Hour Squared", 0.000077160493827),
    U::new("centimeter per second squared", "cm/s²", "Centimeter per Second Squared", 0.01),
    U::new("standard gravity", "g", "Standard Gravity", 9.80665),
];

static SI_MASS: [U; 5] = [
    U::new("kilogram", "kg", "Kilogram", 1.0),
    U::new("gram", "g", "Gram", 0.001),
    U::new("milligram", "mg", "Milligram", 0.000001),
    U::new("microgram", "μg", "Microgram", 0.000000001),
    U::new("tonne", "t", "Tonne", 1000.0),
];

static SI_FORCE: [U; 4] = [
    U::new("newton", "N", "Newton", 1.0),
    U::new("kilonewton", "kN", "Kilonewton", 1000.0),
    U::new("millinewton", "mN", "Millinewton", 0.001),
    U::new("dyne", "dyn", "Dyne", 0.00001),
];

static SI_PRESSURE: [U; 6] = [
    U::new("pascal", "Pa", "Pascal", 1.0),
    U::new("kilopascal", "kPa", "Kilopascal", 1000.0),
    U::new("megapascal", "MPa", "Megapascal", 1000000.0),
    U::new("bar", "bar", "Bar", 100000.0),
    U::new("millibar", "mbar", "Millibar", 100.0),
    U::new("atmosphere", "atm", "Atmosphere", 101325.0),
];

static SI_ENERGY: [U; 6] = [
    U::new("joule", "J", "Joule", 1.0),
    U::new("kilojoule", "kJ", "Kilojoule", 1000.0),
    U::new("calorie", "cal", "Calorie", 4.184),
    U::new("kilocalorie", "kcal", "Kilocalorie", 4184.0),
    U::new("watt hour", "Wh", "Watt Hour", 3600.0),
    U::new("kilowatt hour", "kWh", "Kilowatt Hour", 3600000.0),
];

static SI_TEMPERATURE: [U; 3] = [
    U::with_offset("celsius", "°C", "Celsius", 1.0, 0.0),
    U::with_offset("kelvin", "K", "Kelvin", 1.0, -273.15),
    U::with_pre_offset("fahrenheit", "°F", "Fahrenheit", 5.0 / 9.0, -32.0),
];

static SI_FREQUENCY: [U; 4] = [
    U::new("hertz", "Hz", "Hertz", 1.0),
    U::new("kilohertz", "kHz", "Kilohertz", 1000.0),
    U::new("megahertz", "MHz", "Megahertz", 1000000.0),
    U::new("gigahertz", "GHz", "Gigahertz", 1000000000.0),
];

static SI_POWER: [U; 5] = [
    U::new("watt", "W", "Watt", 1.0),
    U::new("kilowatt", "kW", "Kilowatt", 1000.0),
    U::new("megawatt", "MW", "Megawatt", 1000000.0),
    U::new("milliwatt", "mW", "Milliwatt", 0.001),
    U::new("horsepower", "hp", "Horsepower", 745.699872),
];

// ============ US customary ============

static US_TIME: [U; 7] = [
    U::new("second", "s", "Second", 1.0),
    U::new("minute", "min", "Minute", 60.0),
    U::new("hour", "hr", "Hour", 3600.0),
    U::new("day", "day", "Day", 86400.0),
    U::new("week", "wk", "Week", 604800.0),
    U::new("month", "mo", "Month", 2629746.0),
    U::new("year", "yr", "Year", 31556952.0),
];

static US_LENGTH: [U; 6] = [
    U::new("inch", "in", "Inch", 0.0254),
    U::new("foot", "ft", "Foot", 0.3048),
    U::new("yard", "yd", "Yard", 0.9144),
    U::new("mile", "mi", "Mile", 1609.344),
    U::new("nautical mile", "nmi", "Nautical Mile", 1852.0),
    U::new("thou", "th", "Thou", 0.0000254),
];

static US_AREA: [U; 5] = [
    U::new("square inch", "in²", "Square Inch", 0.00064516),
    U::new("square foot", "ft²", "Square Foot", 0.09290304),
    U::new("square yard", "yd²", "Square Yard", 0.83612736),
    U::new("square mile", "mi²", "Square Mile", 2589988.110336),
    U::new("acre", "ac", "Acre", 4046.8564224),
];

static US_VOLUME: [U; 10] = [
    U::new("fluid ounce", "fl oz", "Fluid Ounce", 0.0000295735),
    U::new("cup", "cup", "Cup", 0.000236588),
    U::new("pint", "pt", "Pint", 0.000473176),
    U::new("quart", "qt", "Quart", 0.000946353),
    U::new("gallon", "gal", "Gallon", 0.00378541),
    U::new("cubic inch", "in³", "Cubic Inch", 0.000016387064),
    U::new("cubic foot", "ft³", "Cubic Foot", 0.028316846592),
    U::new("cubic yard", "yd³", "Cubic Yard", 0.764554857984),
    U::new("tablespoon", "tbsp", "Tablespoon", 0.0000147868),
    U::new("teaspoon", "tsp", "Teaspoon", 0.00000492892),
];

static US_SPEED: [U; 4] = [
    U::new("feet per second", "ft/s", "Feet per Second", 0.3048),
    U::new("miles per hour", "mph", "Miles per Hour", 0.44704),
    U::new("inches per second", "in/s", "Inches per Second", 0.0254),
    U::new("knot", "kn", "Knot", 0.514444),
];

static US_ACCELERATION: [U; 3] = [
    U::new("feet per second squared", "ft/s²", "Feet per Second Squared", 0.3048),
    U::new("inches per second squared", "in/s²", "Inches per Second Squared", 0.0254),
    U::new("standard gravity", "g", "Standard Gravity", 9.80665),
];

static US_MASS: [U; 6] = [
    U::new("ounce", "oz", "Ounce", 0.0283495),
    U::new("pound", "lb", "Pound", 0.453592),
    U::new("stone", "st", "Stone", 6.35029),
    U::new("short ton", "ton", "Short Ton", 907.185),
    U::new("long ton", "long ton", "Long Ton", 1016.05),
    U::new("grain", "gr", "Grain", 0.0000647989),
];

static US_FORCE: [U; 3] = [
    U::new("pound-force", "lbf", "Pound-Force", 4.44822),
    U::new("ounce-force", "ozf", "Ounce-Force", 0.278014),
    U::new("kip", "kip", "Kip", 4448.22),
];

static US_PRESSURE: [U; 4] = [
    U::new("pounds per square inch", "psi", "Pounds per Square Inch", 6894.76),
    U::new("pounds per square foot", "psf", "Pounds per Square Foot", 47.8803),
    U::new("inches of mercury", "inHg", "Inches of Mercury", 3386.39),
    U::new("millimeters of mercury", "mmHg", "Millimeters of Mercury", 133.322),
];

static US_ENERGY: [U; 4] = [
    U::new("British thermal unit", "BTU", "British Thermal Unit", 1055.06),
    U::new("foot-pound", "ft⋅lb", "Foot-Pound", 1.35582),
    U::new("calorie (thermochemical)", "cal", "Calorie", 4.184),
    U::new("therm", "thm", "Therm", 105505585.262),
];

// rankine: value·5/9 − 273.15
static US_TEMPERATURE: [U; 3] = [
    U::with_pre_offset("fahrenheit", "°F", "Fahrenheit", 5.0 / 9.0, -32.0),
    U::with_offset("rankine", "°R", "Rankine", 5.0 / 9.0, -273.15),
    U::with_offset("celsius", "°C", "Celsius", 1.0, 0.0),
];

static US_FREQUENCY: [U; 3] = [
    U::new("hertz", "Hz", "Hertz", 1.0),
    U::new("revolutions per minute", "rpm", "Revolutions per Minute", 0.0166667),
    U::new("cycles per second", "cps", "Cycles per Second", 1.0),
];

static US_POWER: [U; 4] = [
    U::new("horsepower", "hp", "Horsepower", 745.699872),
    U::new("foot-pounds per second", "ft⋅lb/s", "Foot-Pounds per Second", 1.35582),
    U::new("British thermal units per hour", "BTU/h", "BTU per Hour", 0.293071),
    U::new("watt", "W", "Watt", 1.0),
];

// ============ Seximal ============

/// One base unit per dimension, in `Dimension::ALL` order
static SEXIMAL_BASES: [SeximalBase; 13] = [
    SeximalBase::to_si("instant", "inst", "Instant", 0.07716),
    SeximalBase::via_us("thumb", "thm", "Thumb", 2.29867, "inch"),
    SeximalBase::via_us("bock", "bck", "Bock", 5.28388, "square inch"),
    SeximalBase::to_si("fill", "fl", "Fill", 0.0001990345),
    SeximalBase::to_si("rapid", "rpd", "Rapid", 0.75668),
    SeximalBase::to_si("grav", "grv", "Grav", 9.80664),
    SeximalBase::to_si("heft", "hft", "Heft", 0.1990345),
    SeximalBase::to_si("fort", "frt", "Fort", 1.95186),
    SeximalBase::via_us("presh", "prsh", "Presh", 0.08304, "pounds per square inch"),
    SeximalBase::to_si("nerg", "nrg", "Nerg", 0.11396),
    SeximalBase::to_si("celce", "°Ce", "Celce", 1.0),
    SeximalBase::to_si("freckle", "frk", "Freckle", 12.96),
    SeximalBase::to_si("pow", "pw", "Pow", 1.47694),
];

/// Static table for an SI or US dimension; seximal units have no static table
fn static_table(dimension: Dimension, system: MeasurementSystem) -> &'static [UnitDefinition] {
    use Dimension::*;
    use MeasurementSystem::*;

    match (system, dimension) {
        (Si, Time) => &SI_TIME,
        (Si, Length) => &SI_LENGTH,
        (Si, Area) => &SI_AREA,
        (Si, Volume) => &SI_VOLUME,
        (Si, Speed) => &SI_SPEED,
        (Si, Acceleration) => &SI_ACCELERATION,
        (Si, Mass) => &SI_MASS,
        (Si, Force) => &SI_FORCE,
        (Si, Pressure) => &SI_PRESSURE,
        (Si, Energy) => &SI_ENERGY,
        (Si, Temperature) => &SI_TEMPERATURE,
        (Si, Frequency) => &SI_FREQUENCY,
        (Si, Power) => &SI_POWER,

        (Us, Time) => &US_TIME,
        (Us, Length) => &US_LENGTH,
        (Us, Area) => &US_AREA,
        (Us, Volume) => &US_VOLUME,
        (Us, Speed) => &US_SPEED,
        (Us, Acceleration) => &US_ACCELERATION,
        (Us, Mass) => &US_MASS,
        (Us, Force) => &US_FORCE,
        (Us, Pressure) => &US_PRESSURE,
        (Us, Energy) => &US_ENERGY,
        (Us, Temperature) => &US_TEMPERATURE,
        (Us, Frequency) => &US_FREQUENCY,
        (Us, Power) => &US_POWER,

        (Seximal, _) => &[],
    }
}

/// The seximal base unit of a dimension
pub fn seximal_base(dimension: Dimension) -> Option<&'static SeximalBase> {
    Dimension::ALL
        .iter()
        .position(|d| *d == dimension)
        .and_then(|i| SEXIMAL_BASES.get(i))
}

/// All units of a dimension in a system, in declaration order.
///
/// Seximal lists start with the base unit, followed by one unit per prefix.
pub fn units_for(dimension: Dimension, system: MeasurementSystem) -> Vec<UnitDefinition> {
    match system {
        MeasurementSystem::Seximal => match seximal_base(dimension) {
            Some(base) => std::iter::once(base.definition())
                .chain(SeximalPrefix::ALL.into_iter().map(|p| base.prefixed(p)))
                .collect(),
            None => Vec::new(),
        },
        _ => static_table(dimension, system).to_vec(),
    }
}

/// Look up a unit by key.
///
/// Seximal keys are the base key or `{prefix}-{base}`; the prefix match is
/// case-insensitive and the hyphen optional.
pub fn unit(dimension: Dimension, system: MeasurementSystem, key: &str) -> Result<UnitDefinition, ConversionError> {
    let unknown = || ConversionError::UnknownUnit {
        unit: key.to_string(),
        dimension,
        system,
    };

    match system {
        MeasurementSystem::Seximal => {
            let base = seximal_base(dimension).ok_or(ConversionError::UnsupportedDimension(dimension))?;
            if key == base.key {
                return Ok(base.definition());
            }
            let parsed = parse_with_prefix(key);
            match parsed.prefix {
                Some(prefix) if parsed.base_key == base.key => Ok(base.prefixed(prefix)),
                _ => Err(unknown()),
            }
        }
        _ => static_table(dimension, system)
            .iter()
            .find(|u| u.key == key)
            .cloned()
            .ok_or_else(unknown),
    }
}

/// First declared unit key; `None` means the dimension has no units in that system
pub fn default_unit(dimension: Dimension, system: MeasurementSystem) -> Option<String> {
    match system {
        MeasurementSystem::Seximal => seximal_base(dimension).map(|b| b.key.to_string()),
        _ => static_table(dimension, system).first().map(|u| u.key.to_string()),
    }
}

pub fn is_valid_unit(dimension: Dimension, system: MeasurementSystem, key: &str) -> bool {
    unit(dimension, system, key).is_ok()
}

/// `(key, display name)` for every dimension
pub fn list_dimensions() -> Vec<(&'static str, &'static str)> {
    Dimension::ALL.iter().map(|d| (d.key(), d.display_name())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_dimensions() {
        let dims = list_dimensions();
        assert_eq!(dims.len(), 13);
        assert_eq!(dims[0], ("TIME", "Time"));
        assert_eq!(dims[9], ("ENERGY", "Work/Energy"));
    }

    #[test]
    fn test_si_has_one_factor_one_unit() {
        for dimension in Dimension::ALL {
            let ones = units_for(dimension, MeasurementSystem::Si)
                .iter()
                .filter(|u| u.factor == 1.0)
                .count();
            // kiloliter shares factor 1 with cubic meter; kelvin with celsius
            let expected = match dimension {
                Dimension::Volume | Dimension::Temperature => 2,
                _ => 1,
            };
            assert_eq!(ones, expected, "{}", dimension);
        }
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(units_for(Dimension::Time, MeasurementSystem::Si).len(), 7);
        assert_eq!(units_for(Dimension::Volume, MeasurementSystem::Us).len(), 10);
        assert_eq!(units_for(Dimension::Length, MeasurementSystem::Seximal).len(), 13);
    }

    #[test]
    fn test_keys_unique() {
        for dimension in Dimension::ALL {
            for system in MeasurementSystem::ALL {
                let units = units_for(dimension, system);
                for (i, a) in units.iter().enumerate() {
                    assert!(
                        units[i + 1..].iter().all(|b| b.key != a.key),
                        "duplicate {} in {} {}", a.key, dimension, system
                    );
                }
            }
        }
    }

    #[test]
    fn test_default_unit() {
        assert_eq!(default_unit(Dimension::Length, MeasurementSystem::Si).as_deref(), Some("meter"));
        assert_eq!(default_unit(Dimension::Length, MeasurementSystem::Us).as_deref(), Some("inch"));
        assert_eq!(default_unit(Dimension::Length, MeasurementSystem::Seximal).as_deref(), Some("thumb"));
        assert_eq!(default_unit(Dimension::Temperature, MeasurementSystem::Us).as_deref(), Some("fahrenheit"));
        for dimension in Dimension::ALL {
            for system in MeasurementSystem::ALL {
                assert!(default_unit(dimension, system).is_some());
            }
        }
    }

    #[test]
    fn test_seximal_units_generated() {
        let units = units_for(Dimension::Length, MeasurementSystem::Seximal);
        assert_eq!(units[0].key, "thumb");
        assert_eq!(units[0].factor, 1.0);
        assert_eq!(units[1].key, "nifa-thumb");
        assert_eq!(units[1].factor, 36.0);
        assert_eq!(units[2].name, "Kila-Thumb");
        assert_eq!(units[12].key, "pico-thumb");
    }

    #[test]
    fn test_unit_lookup() {
        let foot = unit(Dimension::Length, MeasurementSystem::Us, "foot").unwrap();
        assert_eq!(foot.symbol, "ft");

        let kila = unit(Dimension::Length, MeasurementSystem::Seximal, "kila-thumb").unwrap();
        assert_eq!(kila.factor, 1296.0);

        // the seximal prefix is case-insensitive and the hyphen optional
        let kila = unit(Dimension::Length, MeasurementSystem::Seximal, "KILAthumb").unwrap();
        assert_eq!(kila.key, "kila-thumb");

        assert_eq!(
            unit(Dimension::Length, MeasurementSystem::Seximal, "kila-heft"),
            Err(ConversionError::UnknownUnit {
                unit: "kila-heft".into(),
                dimension: Dimension::Length,
                system: MeasurementSystem::Seximal,
            })
        );
        assert!(unit(Dimension::Length, MeasurementSystem::Si, "foot").is_err());
    }

    #[test]
    fn test_is_valid_unit() {
        assert!(is_valid_unit(Dimension::Mass, MeasurementSystem::Seximal, "heft"));
        assert!(is_valid_unit(Dimension::Mass, MeasurementSystem::Seximal, "milli-heft"));
        assert!(is_valid_unit(Dimension::Energy, MeasurementSystem::Us, "calorie (thermochemical)"));
        assert!(!is_valid_unit(Dimension::Mass, MeasurementSystem::Us, "kilogram"));
    }

    #[test]
    fn test_seximal_base_per_dimension() {
        assert_eq!(seximal_base(Dimension::Time).unwrap().key, "instant");
        assert_eq!(seximal_base(Dimension::Temperature).unwrap().symbol, "°Ce");
        assert_eq!(seximal_base(Dimension::Power).unwrap().key, "pow");
    }

    #[test]
    fn test_via_us_targets_exist() {
        for dimension in Dimension::ALL {
            if let Some(SeximalBase { route: crate::SeximalRoute::ViaUs { unit: us, .. }, .. }) = seximal_base(dimension) {
                assert!(is_valid_unit(dimension, MeasurementSystem::Us, us), "{}", us);
            }
        }
    }
}
