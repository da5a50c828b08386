//! Senary Plugin System
//!
//! Conversion and numeral functions are exposed as `FunctionPlugin`s so the
//! facade and the tool server can call any of them by name.

mod traits;
mod registry;
mod context;
pub mod helpers;

pub use traits::{FunctionPlugin, FunctionMeta, ArgMeta};
pub use registry::PluginRegistry;
pub use context::{EvalContext, DEFAULT_SEXIMAL_PRECISION};

/// Re-export core types for plugin authors
pub mod prelude {
    pub use crate::{
        FunctionPlugin, FunctionMeta, ArgMeta, PluginRegistry, EvalContext,
    };
    pub use senary_core::prelude::*;
}
