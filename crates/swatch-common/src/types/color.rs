use serde::{Deserialize, Serialize};
use std::fmt;

use crate::hex;

/// A display color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::from_rgba(0, 0, 0, 255);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build a color from unit-range channels, clamping out-of-range input.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: hex::unit_to_byte(r),
            g: hex::unit_to_byte(g),
            b: hex::unit_to_byte(b),
            a: hex::unit_to_byte(a),
        }
    }

    /// Channels as `[r, g, b, a]` in `0.0..=1.0`.
    pub fn to_unit(self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        ]
    }

    /// Decode a hex code. See [`hex::decode`] for the accepted forms.
    pub fn from_hex_code(code: &str) -> Self {
        hex::decode(code)
    }

    /// Encode as uppercase `RRGGBB`, or `RRGGBBAA` when `include_alpha` is set.
    pub fn to_hex_code(self, include_alpha: bool) -> String {
        let [r, g, b, a] = self.to_unit();
        hex::encode(r, g, b, Some(a), include_alpha)
    }

    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex_code(!self.is_opaque()))
    }
}
