//! Server configuration from the environment

use std::env;
use senary::DEFAULT_SEXIMAL_PRECISION;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub const PRECISION_VAR: &str = "SENARY_PRECISION";
const DEFAULT_LOG_FILTER: &str = "info";

/// Upper bound on fractional base-6 digits
const MAX_PRECISION: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Fractional base-6 digits for seximal output
    pub precision: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_SEXIMAL_PRECISION }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; invalid values fall back to defaults with a warning
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(PRECISION_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(p) if p <= MAX_PRECISION => config.precision = p,
                _ => warn!(
                    value = %raw,
                    default = config.precision,
                    "{} must be an integer between 0 and {}; using default",
                    PRECISION_VAR,
                    MAX_PRECISION
                ),
            }
        }

        config
    }
}

/// Install the global subscriber: `RUST_LOG` filter, default `info`, written to stderr
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
