//! Swatch configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use swatch_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod colors;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{SwatchConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use swatch_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// file if none exists.
pub fn load_config() -> Result<SwatchConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path, or the platform default when `None`.
pub fn load_config_from(path: Option<&Path>) -> Result<SwatchConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => load_config(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SwatchConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
