use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use swatch_common::id::new_id;
use swatch_common::types::Color;

/// A named, selectable color.
///
/// Identity is the hex code: two models with different ids or names but the
/// same `hex_code` compare equal and hash the same. Comparison is on the
/// string as stored, so `"#FFA500"` and `"FFA500"` are distinct entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorModel {
    pub id: String,
    pub name: String,
    pub hex_code: String,
}

impl ColorModel {
    /// Create a model with a fresh id.
    pub fn new(name: impl Into<String>, hex_code: impl Into<String>) -> Self {
        Self::with_id(new_id(), name, hex_code)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        hex_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hex_code: hex_code.into(),
        }
    }

    /// Create a model from a display color, encoding it as hex.
    pub fn from_color(name: impl Into<String>, color: Color, include_alpha: bool) -> Self {
        Self::new(name, color.to_hex_code(include_alpha))
    }

    /// The display color for this model's hex code.
    pub fn color(&self) -> Color {
        Color::from_hex_code(&self.hex_code)
    }
}

impl PartialEq for ColorModel {
    fn eq(&self, other: &Self) -> bool {
        self.hex_code == other.hex_code
    }
}

impl Eq for ColorModel {}

impl Hash for ColorModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hex_code.hash(state);
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.hex_code)
    }
}
