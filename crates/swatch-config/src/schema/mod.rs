//! Configuration schema types for Swatch.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod background;
mod palette;
mod system;

pub use background::*;
pub use palette::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Swatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SwatchConfig {
    pub palette: PaletteConfig,
    pub background: BackgroundConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_palette() {
        let config = SwatchConfig::default();
        assert_eq!(config.palette.candidate_count, 15);
        assert_eq!(config.palette.seed, None);
        assert_eq!(config.palette.reference.name, "Orange");
        assert_eq!(config.palette.reference.hex, "FFA500");
    }

    #[test]
    fn bounded_candidate_count_clamps() {
        let mut palette = PaletteConfig::default();
        assert_eq!(palette.bounded_candidate_count(), 15);

        palette.candidate_count = MAX_CANDIDATES;
        assert_eq!(palette.bounded_candidate_count(), MAX_CANDIDATES);

        palette.candidate_count = u32::MAX;
        assert_eq!(palette.bounded_candidate_count(), MAX_CANDIDATES);
    }

    #[test]
    fn default_config_has_correct_background() {
        let config = SwatchConfig::default();
        assert_eq!(config.background.gradient_type, GradientType::Linear);
        assert_eq!(config.background.angle, 180);
    }

    #[test]
    fn default_log_level_is_info() {
        let config = SwatchConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.logging.level.directive(), "swatch=info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let toml_str = r#"
[palette]
seed = 7
"#;
        let config: SwatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.palette.seed, Some(7));
        assert_eq!(config.palette.candidate_count, 15);
        assert_eq!(config.palette.reference.hex, "FFA500");
    }

    #[test]
    fn gradient_type_and_level_deserialize() {
        let toml_str = r#"
[background]
type = "radial"
angle = 90

[logging]
level = "WARNING"
"#;
        let config: SwatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.background.gradient_type, GradientType::Radial);
        assert_eq!(config.background.angle, 90);
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.logging.level.directive(), "swatch=warn");
    }

    #[test]
    fn reference_color_override() {
        let toml_str = r##"
[palette.reference]
name = "Teal"
hex = "#008080"
"##;
        let config: SwatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.palette.reference.name, "Teal");
        assert_eq!(config.palette.reference.hex, "#008080");
    }

    #[test]
    fn unknown_gradient_type_is_rejected() {
        let toml_str = r#"
[background]
type = "conic"
"#;
        assert!(toml::from_str::<SwatchConfig>(toml_str).is_err());
    }
}
