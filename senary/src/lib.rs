//! Senary - measurement conversion between SI, US customary and seximal units

mod panels;

pub use panels::{format_decimal, EditOutcome, Panel, Panels, ERROR_TEXT};

pub use senary_core::{codes, SenaryError, Severity, Value};
pub use senary_numeral as numeral;
pub use senary_plugin::{EvalContext, PluginRegistry, DEFAULT_SEXIMAL_PRECISION};
pub use senary_units as units;
pub use senary_units::{Dimension, MeasurementSystem};

use std::sync::Arc;

/// Registry with every numeral and unit function loaded
pub fn standard_registry() -> PluginRegistry {
    let registry = PluginRegistry::new();
    let registry = senary_numeral::load_numeral_library(registry);
    senary_units::load_units_library(registry)
}

/// Main Senary engine
pub struct Senary {
    registry: Arc<PluginRegistry>,
    precision: u32,
}

impl Senary {
    pub fn new(registry: PluginRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            precision: DEFAULT_SEXIMAL_PRECISION,
        }
    }

    pub fn with_standard_library() -> Self {
        Self::new(standard_registry())
    }

    /// Fractional base-6 digits used when rendering seximal values
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn registry(&self) -> &Arc<PluginRegistry> {
        &self.registry
    }

    /// Call a registered function by name
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        let ctx = EvalContext::new(self.registry.clone()).with_precision(self.precision);
        self.registry.call_function(name, args, &ctx)
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        self.registry.help(name)
    }

    pub fn list_functions(&self, category: Option<&str>) -> Value {
        self.registry.list_functions(category)
    }

    /// Fresh three-panel view of `dimension` at this engine's precision
    pub fn panels(&self, dimension: Dimension) -> Panels {
        Panels::new(dimension).with_precision(self.precision)
    }
}

impl Default for Senary {
    fn default() -> Self {
        Self::with_standard_library()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn test_standard_registry_has_both_libraries() {
        let senary = Senary::default();
        let names = senary.registry().function_names();
        assert!(names.contains(&"convert"));
        assert!(names.contains(&"to_seximal"));
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_call_by_name() {
        let senary = Senary::default();
        assert_eq!(senary.call("to_seximal", &[Value::Number(35.0)]), text("55"));
        assert_eq!(senary.call("from_seximal", &[text("55")]), Value::Number(35.0));

        let args = [
            Value::Number(0.0),
            text("TEMPERATURE"),
            text("celsius"),
            text("si"),
            text("fahrenheit"),
            text("us"),
        ];
        assert_eq!(senary.call("convert", &args), Value::Number(32.0));
    }

    #[test]
    fn test_precision_flows_to_functions() {
        let senary = Senary::default().with_precision(3);
        assert_eq!(senary.call("to_seximal", &[Value::Number(0.1)]), text("0.033"));
    }

    #[test]
    fn test_unknown_function_suggests() {
        let senary = Senary::default();
        let result = senary.call("to_sexmal", &[]);
        let err = result.as_error().unwrap();
        assert_eq!(err.code, codes::UNDEFINED_FUNC);
        assert!(err.suggestion.as_deref().unwrap_or("").contains("to_seximal"));
    }

    #[test]
    fn test_list_functions_by_category() {
        let senary = Senary::default();
        let listed = senary.list_functions(Some("seximal"));
        assert_eq!(listed.as_list().map(|l| l.len()), Some(8));
    }

    #[test]
    fn test_panels_use_engine_precision() {
        let senary = Senary::default().with_precision(2);
        let mut panels = senary.panels(Dimension::Temperature);
        panels.edit(MeasurementSystem::Si, "0.1");
        assert_eq!(panels.panel(MeasurementSystem::Seximal).text, "0.03");
    }
}
