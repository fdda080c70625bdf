//! Background preview configuration types.

use serde::{Deserialize, Serialize};

/// Gradient type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum GradientType {
    #[default]
    Linear,
    Radial,
}

/// Background preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    #[serde(rename = "type")]
    pub gradient_type: GradientType,
    /// Linear gradient angle in degrees (valid range: 0-360).
    pub angle: u32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            gradient_type: GradientType::Linear,
            angle: 180,
        }
    }
}
