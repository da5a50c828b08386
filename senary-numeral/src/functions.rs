//! Seximal numeral functions

use senary_core::{SenaryError, Value};
use senary_plugin::helpers::{extract_number, extract_precision, extract_text, require_args};
use senary_plugin::{ArgMeta, EvalContext, FunctionMeta, FunctionPlugin};

use crate::{convert_base, decode, encode, format_seximal, is_valid, NumberBase, SeximalPrefix};

// ============ to_seximal ============

pub struct ToSeximal;

static TO_SEXIMAL_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Decimal value to encode"),
    ArgMeta::optional("precision", "Number", "Maximum fractional base-6 digits", "6"),
];

static TO_SEXIMAL_EXAMPLES: [&str; 3] = [
    "to_seximal(35) → \"55\"",
    "to_seximal(0.5) → \"0.3\"",
    "to_seximal(0.1, 3) → \"0.033\"",
];

static TO_SEXIMAL_RELATED: [&str; 2] = ["from_seximal", "convert_base"];

impl FunctionPlugin for ToSeximal {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_seximal",
            description: "Encode a decimal number as a seximal (base-6) numeral",
            usage: "to_seximal(value, [precision])",
            args: &TO_SEXIMAL_ARGS,
            returns: "Text",
            examples: &TO_SEXIMAL_EXAMPLES,
            category: "seximal",
            related: &TO_SEXIMAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "to_seximal", 1)?;
            let value = extract_number(&args[0], "to_seximal", "value")?;
            let precision = extract_precision(args, 1, "to_seximal", ctx.precision)?;
            Ok(Value::Text(encode(value, precision)?))
        };
        run().unwrap_or_else(Value::Error)
    }
}

// ============ from_seximal ============

pub struct FromSeximal;

static FROM_SEXIMAL_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("numeral", "Text", "Seximal numeral, digits 0-5"),
];

static FROM_SEXIMAL_EXAMPLES: [&str; 2] = [
    "from_seximal(\"55\") → 35",
    "from_seximal(\"-0.3\") → -0.5",
];

static FROM_SEXIMAL_RELATED: [&str; 2] = ["to_seximal", "is_seximal"];

impl FunctionPlugin for FromSeximal {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "from_seximal",
            description: "Decode a seximal (base-6) numeral to a decimal number",
            usage: "from_seximal(numeral)",
            args: &FROM_SEXIMAL_ARGS,
            returns: "Number",
            examples: &FROM_SEXIMAL_EXAMPLES,
            category: "seximal",
            related: &FROM_SEXIMAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "from_seximal", 1)?;
            let numeral = extract_text(&args[0], "from_seximal", "numeral")?;
            Ok(Value::Number(decode(numeral)?))
        };
        run().unwrap_or_else(Value::Error)
    }
}

// ============ is_seximal ============

pub struct IsSeximal;

static IS_SEXIMAL_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("text", "Text", "Candidate numeral"),
];

static IS_SEXIMAL_EXAMPLES: [&str; 2] = [
    "is_seximal(\"52.5\") → true",
    "is_seximal(\"56\") → false",
];

static IS_SEXIMAL_RELATED: [&str; 1] = ["from_seximal"];

impl FunctionPlugin for IsSeximal {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "is_seximal",
            description: "Check whether text is a well-formed seximal numeral",
            usage: "is_seximal(text)",
            args: &IS_SEXIMAL_ARGS,
            returns: "Bool",
            examples: &IS_SEXIMAL_EXAMPLES,
            category: "seximal",
            related: &IS_SEXIMAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        if args.is_empty() {
            return Value::Error(SenaryError::arg_count("is_seximal", 1, 0));
        }
        // Anything that is not text cannot be a numeral
        Value::Bool(args[0].as_text().is_some_and(is_valid))
    }
}

// ============ format_seximal ============

pub struct FormatSeximal;

static FORMAT_SEXIMAL_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("numeral", "Text", "Seximal numeral to normalise"),
    ArgMeta::optional("precision", "Number", "Maximum fractional base-6 digits", "6"),
];

static FORMAT_SEXIMAL_EXAMPLES: [&str; 2] = [
    "format_seximal(\"0055.300\") → \"55.3\"",
    "format_seximal(\"0.0333333\", 3) → \"0.033\"",
];

static FORMAT_SEXIMAL_RELATED: [&str; 2] = ["to_seximal", "from_seximal"];

impl FunctionPlugin for FormatSeximal {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "format_seximal",
            description: "Normalise a seximal numeral (strip padding, bound precision)",
            usage: "format_seximal(numeral, [precision])",
            args: &FORMAT_SEXIMAL_ARGS,
            returns: "Text",
            examples: &FORMAT_SEXIMAL_EXAMPLES,
            category: "seximal",
            related: &FORMAT_SEXIMAL_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "format_seximal", 1)?;
            let numeral = extract_text(&args[0], "format_seximal", "numeral")?;
            let precision = extract_precision(args, 1, "format_seximal", ctx.precision)?;
            Ok(Value::Text(format_seximal(numeral, precision)?))
        };
        run().unwrap_or_else(Value::Error)
    }
}

// ============ convert_base ============

pub struct ConvertBase;

static CONVERT_BASE_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Text|Number", "Number literal to convert"),
    ArgMeta::required("from_base", "Text", "\"decimal\" or \"seximal\""),
    ArgMeta::required("to_base", "Text", "\"decimal\" or \"seximal\""),
    ArgMeta::optional("precision", "Number", "Maximum fractional base-6 digits", "6"),
];

static CONVERT_BASE_EXAMPLES: [&str; 2] = [
    "convert_base(\"35\", \"decimal\", \"seximal\") → \"55\"",
    "convert_base(\"55.3\", \"seximal\", \"decimal\") → \"35.5\"",
];

static CONVERT_BASE_RELATED: [&str; 2] = ["to_seximal", "from_seximal"];

impl FunctionPlugin for ConvertBase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "convert_base",
            description: "Convert a number literal between decimal and seximal notation",
            usage: "convert_base(value, from_base, to_base, [precision])",
            args: &CONVERT_BASE_ARGS,
            returns: "Text",
            examples: &CONVERT_BASE_EXAMPLES,
            category: "seximal",
            related: &CONVERT_BASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], ctx: &EvalContext) -> Value {
        let run = || -> Result<Value, SenaryError> {
            require_args(args, "convert_base", 3)?;
            let literal = match &args[0] {
                Value::Number(n) => n.to_string(),
                other => extract_text(other, "convert_base", "value")?.to_string(),
            };
            let from: NumberBase = extract_text(&args[1], "convert_base", "from_base")?.parse()?;
            let to: NumberBase = extract_text(&args[2], "convert_base", "to_base")?.parse()?;
            let precision = extract_precision(args, 3, "convert_base", ctx.precision)?;
            Ok(Value::Text(convert_base(&literal, from, to, precision)?))
        };
        run().unwrap_or_else(Value::Error)
    }
}

// ============ apply_prefix / remove_prefix ============

pub struct ApplyPrefix;

static PREFIX_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("value", "Number", "Value to scale"),
    ArgMeta::required("prefix", "Text", "Seximal prefix name, e.g. \"kila\""),
];

static APPLY_PREFIX_EXAMPLES: [&str; 2] = [
    "apply_prefix(2, \"kila\") → 2592",
    "apply_prefix(36, \"nivi\") → 1",
];

static REMOVE_PREFIX_EXAMPLES: [&str; 2] = [
    "remove_prefix(2592, \"kila\") → 2",
    "remove_prefix(1, \"nivi\") → 36",
];

static PREFIX_RELATED: [&str; 3] = ["apply_prefix", "remove_prefix", "list_prefixes"];

fn prefix_call(args: &[Value], func: &str, scale: fn(f64, SeximalPrefix) -> f64) -> Value {
    let run = || -> Result<Value, SenaryError> {
        require_args(args, func, 2)?;
        let value = extract_number(&args[0], func, "value")?;
        let prefix: SeximalPrefix = extract_text(&args[1], func, "prefix")?.parse()?;
        Ok(Value::Number(scale(value, prefix)))
    };
    run().unwrap_or_else(Value::Error)
}

impl FunctionPlugin for ApplyPrefix {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "apply_prefix",
            description: "Convert a value in prefixed units to base units (multiply by 6^power)",
            usage: "apply_prefix(value, prefix)",
            args: &PREFIX_ARGS,
            returns: "Number",
            examples: &APPLY_PREFIX_EXAMPLES,
            category: "seximal",
            related: &PREFIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        prefix_call(args, "apply_prefix", crate::apply_prefix)
    }
}

pub struct RemovePrefix;

impl FunctionPlugin for RemovePrefix {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "remove_prefix",
            description: "Convert a value in base units to prefixed units (divide by 6^power)",
            usage: "remove_prefix(value, prefix)",
            args: &PREFIX_ARGS,
            returns: "Number",
            examples: &REMOVE_PREFIX_EXAMPLES,
            category: "seximal",
            related: &PREFIX_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        prefix_call(args, "remove_prefix", crate::remove_prefix)
    }
}

// ============ list_prefixes ============

pub struct ListPrefixes;

impl FunctionPlugin for ListPrefixes {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "list_prefixes",
            description: "List the seximal prefixes with their powers of 6",
            usage: "list_prefixes()",
            args: &[],
            returns: "List",
            examples: &["list_prefixes() → [{name: nifa, power: 2, factor: 36}, ...]"],
            category: "seximal",
            related: &["apply_prefix", "remove_prefix"],
        }
    }

    fn call(&self, _args: &[Value], _ctx: &EvalContext) -> Value {
        Value::List(SeximalPrefix::ALL.iter().map(|p| {
            Value::object([
                ("name", Value::Text(p.name().to_string())),
                ("power", Value::Number(p.power() as f64)),
                ("factor", Value::Number(p.factor())),
            ])
        }).collect())
    }
}
