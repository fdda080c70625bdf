//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod background;
mod helpers;
mod palette;


use crate::schema::SwatchConfig;
use swatch_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SwatchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    palette::validate_palette(&mut errors, config);
    background::validate_background(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
