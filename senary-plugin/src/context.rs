//! Evaluation Context

use crate::PluginRegistry;
use std::sync::Arc;

/// Fractional base-6 digits emitted when a caller does not ask for a precision
pub const DEFAULT_SEXIMAL_PRECISION: u32 = 6;

/// Evaluation context passed to plugins
pub struct EvalContext {
    /// Fractional digits used when encoding seximal numerals
    pub precision: u32,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            precision: DEFAULT_SEXIMAL_PRECISION,
            registry,
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        let ctx = EvalContext::new(Arc::new(PluginRegistry::new()));
        assert_eq!(ctx.precision, DEFAULT_SEXIMAL_PRECISION);
        assert_eq!(ctx.with_precision(10).precision, 10);
    }
}
