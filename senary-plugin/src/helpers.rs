//! Argument extraction shared by function plugins

use senary_core::{SenaryError, Value};

/// Fail with ARG_COUNT unless at least `expected` arguments were passed
pub fn require_args(args: &[Value], func: &str, expected: usize) -> Result<(), SenaryError> {
    if args.len() < expected {
        return Err(SenaryError::arg_count(func, expected, args.len()));
    }
    Ok(())
}

/// Extract a Number from a Value, returning error context
pub fn extract_number(value: &Value, func: &str, arg: &str) -> Result<f64, SenaryError> {
    match value {
        Value::Number(n) => Ok(*n),
        Value::Error(e) => Err(e.clone()),
        other => Err(SenaryError::arg_type(func, arg, "Number", other.type_name())),
    }
}

/// Extract a Text string from a Value
pub fn extract_text<'a>(value: &'a Value, func: &str, arg: &str) -> Result<&'a str, SenaryError> {
    match value {
        Value::Text(s) => Ok(s),
        Value::Error(e) => Err(e.clone()),
        other => Err(SenaryError::arg_type(func, arg, "Text", other.type_name())),
    }
}

/// Extract an optional precision argument, falling back to `default`
pub fn extract_precision(args: &[Value], index: usize, func: &str, default: u32) -> Result<u32, SenaryError> {
    match args.get(index) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 => Ok(*n as u32),
        Some(Value::Number(n)) => Err(SenaryError::arg_type(func, "precision", "non-negative integer", &n.to_string())),
        Some(other) => Err(SenaryError::arg_type(func, "precision", "Number", other.type_name())),
    }
}
