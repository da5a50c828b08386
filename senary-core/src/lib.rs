//! Senary Core - Fundamental types
//!
//! This crate provides the types shared by every Senary crate:
//! - `Value`: Runtime values (numbers, text, objects, errors)
//! - `SenaryError`: Structured errors with machine-readable codes

mod value;
mod error;

pub use value::Value;
pub use error::{SenaryError, ErrorContext, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Value, SenaryError, Severity};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_accessors() {
            assert_eq!(Value::Number(1.5).as_number(), Some(1.5));
            assert_eq!(Value::Text("55".into()).as_text(), Some("55"));
            assert_eq!(Value::Bool(true).as_bool(), Some(true));
            assert!(Value::Null.as_number().is_none());
        }

        #[test]
        fn test_object_get() {
            let obj = Value::object([("key", Value::from("LENGTH"))]);
            assert_eq!(obj.get("key"), Value::Text("LENGTH".into()));
            assert!(obj.get("missing").is_error());
            assert!(Value::Number(1.0).get("key").is_error());
        }

        #[test]
        fn test_from_result() {
            let ok: Result<f64, SenaryError> = Ok(2.0);
            assert_eq!(Value::from(ok), Value::Number(2.0));

            let err: Result<f64, SenaryError> = Err(SenaryError::new(codes::INVALID_DIGIT, "bad"));
            let value = Value::from(err);
            assert_eq!(value.as_error().map(|e| e.code.as_str()), Some(codes::INVALID_DIGIT));
        }

        #[test]
        fn test_display() {
            assert_eq!(Value::Number(35.0).to_string(), "35");
            assert_eq!(Value::List(vec![Value::from(1.0), Value::from("a")]).to_string(), "[1, a]");
            assert_eq!(
                Value::object([("b", Value::from(2.0)), ("a", Value::from(1.0))]).to_string(),
                "{a: 1, b: 2}"
            );
            let err = Value::Error(SenaryError::new(codes::UNKNOWN_UNIT, "x"));
            assert_eq!(err.to_string(), "#ERROR: UNKNOWN_UNIT");
        }

        #[test]
        fn test_serde_tagging() {
            let json = serde_json::to_value(Value::Number(2.5)).unwrap();
            assert_eq!(json["type"], "Number");
            assert_eq!(json["value"], 2.5);
        }
    }
}
