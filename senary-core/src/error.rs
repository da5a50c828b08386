//! Structured errors for tool and plugin consumers
//!
//! Errors never crash the system. They are values that propagate through
//! calls and carry a machine-readable code plus an actionable suggestion.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_SYSTEM: &str = "UNKNOWN_SYSTEM";
    pub const UNKNOWN_DIMENSION: &str = "UNKNOWN_DIMENSION";
    pub const UNSUPPORTED_DIMENSION: &str = "UNSUPPORTED_DIMENSION";
    pub const UNKNOWN_PREFIX: &str = "UNKNOWN_PREFIX";
    pub const UNKNOWN_BASE: &str = "UNKNOWN_BASE";
    pub const INVALID_DIGIT: &str = "INVALID_DIGIT";
    pub const INVALID_NUMERAL: &str = "INVALID_NUMERAL";
    pub const NUMERIC_PARSE: &str = "NUMERIC_PARSE";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const CONVERSION_FAILED: &str = "CONVERSION_FAILED";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const UNDEFINED_FIELD: &str = "UNDEFINED_FIELD";
    pub const TYPE_ERROR: &str = "TYPE_ERROR";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INTERNAL: &str = "INTERNAL";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Result is usable but degraded
    Warning,
    /// The call failed
    Error,
    /// The caller cannot continue
    Fatal,
}

/// Context about where an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Function or tool that raised the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,

    /// Raw input that could not be handled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error returned across the plugin and tool surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenaryError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    /// Severity level
    pub severity: Severity,
}

impl SenaryError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: add context
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Builder: set function context
    pub fn in_function(mut self, function: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.function = Some(function.into());
        self
    }

    /// Builder: set raw input context
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.input = Some(input.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    /// Wraps the message of a failed conversion leg, keeping its code in a note
    pub fn conversion_failed(cause: &SenaryError) -> Self {
        let mut err = Self::new(
            codes::CONVERSION_FAILED,
            format!("Conversion failed: {}", cause.message),
        )
        .with_note(format!("caused by {}", cause.code));
        err.suggestion = cause.suggestion.clone();
        err
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use list_functions to see what is available")
    }

    pub fn undefined_field(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FIELD, format!("Undefined field: {}", name))
    }

    pub fn type_error(expected: &str, got: &str) -> Self {
        Self::new(codes::TYPE_ERROR, format!("Expected {}, got {}", expected, got))
    }

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got))
            .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(codes::NOT_FOUND, what)
    }

    pub fn internal(details: impl Into<String>) -> Self {
        Self::new(codes::INTERNAL, format!("Internal error: {}", details.into()))
            .with_suggestion("This is a bug, please report it")
            .with_severity(Severity::Fatal)
    }
}

impl std::fmt::Display for SenaryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for SenaryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_suggestion() {
        let err = SenaryError::arg_count("convert", 6, 2);
        let text = err.to_string();
        assert!(text.starts_with("[ARG_COUNT]"));
        assert!(text.contains("help('convert')"));
    }

    #[test]
    fn test_conversion_failed_preserves_message() {
        let cause = SenaryError::new(codes::UNKNOWN_UNIT, "Unknown unit 'furlong'")
            .with_suggestion("Pick another unit");
        let err = SenaryError::conversion_failed(&cause);
        assert_eq!(err.code, codes::CONVERSION_FAILED);
        assert_eq!(err.message, "Conversion failed: Unknown unit 'furlong'");
        assert_eq!(err.suggestion.as_deref(), Some("Pick another unit"));
        let notes = &err.context.as_ref().map(|c| c.notes.clone()).unwrap_or_default();
        assert_eq!(notes, &vec!["caused by UNKNOWN_UNIT".to_string()]);
    }

    #[test]
    fn test_serialize_skips_empty_fields() {
        let err = SenaryError::new(codes::INVALID_NUMERAL, "bad");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["severity"], "error");
        assert!(json.get("suggestion").is_none());
        assert!(json.get("context").is_none());
    }

    #[test]
    fn test_builders_share_context() {
        let err = SenaryError::new(codes::NUMERIC_PARSE, "nope")
            .in_function("convert")
            .with_input("12x");
        let ctx = err.context.unwrap();
        assert_eq!(ctx.function.as_deref(), Some("convert"));
        assert_eq!(ctx.input.as_deref(), Some("12x"));
    }
}
