//! Unit conversion functions

use senary_plugin::prelude::*;
use senary_plugin::helpers::{extract_text, require_args};
use senary_numeral::encode;
use crate::engine;
use crate::parse::{parse_dimension, parse_system, parse_value};
use crate::units;
use crate::{Dimension, MeasurementSystem, UnitDefinition};

fn dimension_arg(args: &[Value], index: usize, func: &str) -> Result<Dimension, SenaryError> {
    Ok(parse_dimension(extract_text(&args[index], func, "dimension")?)?)
}

fn system_arg(args: &[Value], index: usize, func: &str, name: &str) -> Result<MeasurementSystem, SenaryError> {
    Ok(parse_system(extract_text(&args[index], func, name)?)?)
}

/// A measurement is a Number, or Text in the notation of its system
fn measurement_arg(value: &Value, system: MeasurementSystem, func: &str) -> Result<f64, SenaryError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Text(s) => Ok(parse_value(s, system)?),
        Value::Error(e) => Err(e.clone()),
        other => Err(SenaryError::arg_type(func, "value", "Number or Text", other.type_name())),
    }
}

fn unit_to_value(unit: &UnitDefinition) -> Value {
    let mut fields = vec![
        ("key", Value::Text(unit.key.to_string())),
        ("symbol", Value::Text(unit.symbol.to_string())),
        ("name", Value::Text(unit.name.to_string())),
        ("factor", Value::Number(unit.factor)),
    ];
    if let Some(offset) = unit.offset {
        fields.push(("offset", Value::Number(offset)));
    }
    Value::object(fields)
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 6] = [
    ArgMeta::required("value", "Number|Text", "Value to convert; seximal sources accept a base-6 numeral"),
    ArgMeta::required("dimension", "Text", "Dimension (e.g., \"LENGTH\")"),
    ArgMeta::required("from_unit", "Text", "Source unit key (e.g., \"meter\")"),
    ArgMeta::required("from_system", "Text", "Source system: si, us or seximal"),
    ArgMeta::required("to_unit", "Text", "Target unit key (e.g., \"foot\")"),
    ArgMeta::required("to_system", "Text", "Target system: si, us or seximal"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(100, \"LENGTH\", \"meter\", \"si\", \"foot\", \"us\") → 328.084",
    "convert(0, \"TEMPERATURE\", \"celsius\", \"si\", \"fahrenheit\", \"us\") → 32",
    "convert(1, \"LENGTH\", \"inch\", \"us\", \"thumb\", \"seximal\") → \"0.233544\"",
];

static CONVERT_RELATED: [&str; 3] = ["to_canonical", "from_canonical", "list_units"];

impl FunctionPlugin for Convert {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert",
            description: "Convert a value between units of any two systems; seximal targets return a base-6 numeral",
            usage: "convert(value, dimension, from_unit, from_system, to_unit, to_system)",
            args: &CONVERT_ARGS,
            returns: "Number|Text",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "convert", 6)?;
            let dimension = dimension_arg(args, 1, "convert")?;
            let from_system = system_arg(args, 3, "convert", "from_system")?;
            let to_system = system_arg(args, 5, "convert", "to_system")?;
            let value = measurement_arg(&args[0], from_system, "convert")?;
            let from_unit = extract_text(&args[2], "convert", "from_unit")?;
            let to_unit = extract_text(&args[4], "convert", "to_unit")?;

            let result = engine::convert(value, dimension, from_unit, from_system, to_unit, to_system)
                .map_err(|e| SenaryError::conversion_failed(&SenaryError::from(e)).in_function("convert"))?;

            if to_system.is_seximal() {
                Ok(Value::Text(encode(result, ctx.precision)?))
            } else {
                Ok(Value::Number(result))
            }
        };
        run().unwrap_or_else(Value::Error)
    }
}

// ============ to_canonical / from_canonical ============

pub struct ToCanonical;

static CANONICAL_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Number|Text", "Value to convert"),
    ArgMeta::required("dimension", "Text", "Dimension (e.g., \"MASS\")"),
    ArgMeta::required("unit", "Text", "Unit key"),
    ArgMeta::required("system", "Text", "si, us or seximal"),
];

static TO_CANONICAL_EXAMPLES: [&str; 2] = [
    "to_canonical(1, \"LENGTH\", \"foot\", \"us\") → 0.3048",
    "to_canonical(\"1\", \"MASS\", \"heft\", \"seximal\") → 0.1990345",
];

static FROM_CANONICAL_EXAMPLES: [&str; 2] = [
    "from_canonical(0.3048, \"LENGTH\", \"foot\", \"us\") → 1",
    "from_canonical(100, \"TEMPERATURE\", \"fahrenheit\", \"us\") → 212",
];

static CANONICAL_RELATED: [&str; 3] = ["convert", "to_canonical", "from_canonical"];

impl FunctionPlugin for ToCanonical {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_canonical",
            description: "Normalise a value to the SI canonical unit of its dimension",
            usage: "to_canonical(value, dimension, unit, system)",
            args: &CANONICAL_ARGS,
            returns: "Number",
            examples: &TO_CANONICAL_EXAMPLES,
            category: "units",
            related: &CANONICAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "to_canonical", 4)?;
            let dimension = dimension_arg(args, 1, "to_canonical")?;
            let system = system_arg(args, 3, "to_canonical", "system")?;
            let value = measurement_arg(&args[0], system, "to_canonical")?;
            let unit = extract_text(&args[2], "to_canonical", "unit")?;
            Ok(Value::Number(engine::to_canonical(value, dimension, unit, system)?))
        };
        run().unwrap_or_else(Value::Error)
    }
}

pub struct FromCanonical;

impl FunctionPlugin for FromCanonical {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "from_canonical",
            description: "Express an SI canonical value in the given unit",
            usage: "from_canonical(si_value, dimension, unit, system)",
            args: &CANONICAL_ARGS,
            returns: "Number",
            examples: &FROM_CANONICAL_EXAMPLES,
            category: "units",
            related: &CANONICAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "from_canonical", 4)?;
            let dimension = dimension_arg(args, 1, "from_canonical")?;
            let system = system_arg(args, 3, "from_canonical", "system")?;
            // the SI value is always decimal
            let si_value = measurement_arg(&args[0], MeasurementSystem::Si, "from_canonical")?;
            let unit = extract_text(&args[2], "from_canonical", "unit")?;
            Ok(Value::Number(engine::from_canonical(si_value, dimension, unit, system)?))
        };
        run().unwrap_or_else(Value::Error)
    }
}

// ============ catalogue ============

pub struct ListDimensions;

impl FunctionPlugin for ListDimensions {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_dimensions",
            description: "List the supported dimensions in display order",
            usage: "list_dimensions()",
            args: &[],
            returns: "List",
            examples: &["list_dimensions() → [{key: TIME, name: Time}, ...]"],
            category: "units",
            related: &["list_units"],
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::List(
            units::list_dimensions()
                .into_iter()
                .map(|(key, name)| Value::object([("key", Value::from(key)), ("name", Value::from(name))]))
                .collect(),
        )
    }
}

pub struct ListUnits;

static SYSTEM_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("dimension", "Text", "Dimension (e.g., \"LENGTH\")"),
    ArgMeta::required("system", "Text", "si, us or seximal"),
];

impl FunctionPlugin for ListUnits {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_units",
            description: "List the units of a dimension in one system, in declaration order",
            usage: "list_units(dimension, system)",
            args: &SYSTEM_ARGS,
            returns: "List",
            examples: &["list_units(\"LENGTH\", \"seximal\") → [{key: thumb, ...}, {key: nifa-thumb, ...}, ...]"],
            category: "units",
            related: &["default_unit", "is_valid_unit", "list_dimensions"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "list_units", 2)?;
            let dimension = dimension_arg(args, 0, "list_units")?;
            let system = system_arg(args, 1, "list_units", "system")?;
            Ok(Value::List(units::units_for(dimension, system).iter().map(unit_to_value).collect()))
        };
        run().unwrap_or_else(Value::Error)
    }
}

pub struct DefaultUnit;

impl FunctionPlugin for DefaultUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "default_unit",
            description: "First declared unit of a dimension in one system",
            usage: "default_unit(dimension, system)",
            args: &SYSTEM_ARGS,
            returns: "Text",
            examples: &["default_unit(\"LENGTH\", \"us\") → \"inch\""],
            category: "units",
            related: &["list_units"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "default_unit", 2)?;
            let dimension = dimension_arg(args, 0, "default_unit")?;
            let system = system_arg(args, 1, "default_unit", "system")?;
            Ok(units::default_unit(dimension, system).map(Value::Text).unwrap_or(Value::Null))
        };
        run().unwrap_or_else(Value::Error)
    }
}

pub struct IsValidUnit;

static IS_VALID_UNIT_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("dimension", "Text", "Dimension (e.g., \"LENGTH\")"),
    ArgMeta::required("system", "Text", "si, us or seximal"),
    ArgMeta::required("unit", "Text", "Unit key to check"),
];

impl FunctionPlugin for IsValidUnit {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_valid_unit",
            description: "Check whether a unit key exists for a dimension in one system",
            usage: "is_valid_unit(dimension, system, unit)",
            args: &IS_VALID_UNIT_ARGS,
            returns: "Bool",
            examples: &["is_valid_unit(\"LENGTH\", \"seximal\", \"kila-thumb\") → true"],
            category: "units",
            related: &["list_units"],
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "is_valid_unit", 3)?;
            let dimension = dimension_arg(args, 0, "is_valid_unit")?;
            let system = system_arg(args, 1, "is_valid_unit", "system")?;
            let unit = extract_text(&args[2], "is_valid_unit", "unit")?;
            Ok(Value::Bool(units::is_valid_unit(dimension, system, unit)))
        };
        run().unwrap_or_else(Value::Error)
    }
}
