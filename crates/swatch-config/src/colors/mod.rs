//! Strict hex color validation.
//!
//! The codec in `swatch_common::hex` accepts anything and falls back to a
//! placeholder value. User-supplied colors (config files, command-line
//! selections) go through this module first so typos surface as errors
//! instead of near-black swatches.

mod parse;

#[cfg(test)]
mod tests;

use swatch_common::types::Color;
use swatch_common::ConfigError;

use parse::HEX_RE;

/// Parse a user-supplied hex color.
///
/// Accepted formats (the `#` is optional):
/// - `#RGB` (e.g. `#f80`)
/// - `#RRGGBB` (e.g. `#ffa500`)
/// - `#AARRGGBB` (e.g. `#80ffa500`)
pub fn parse_hex(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();
    if !HEX_RE.is_match(s) {
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }
    Ok(swatch_common::hex::decode(s))
}

/// Validate that a string is a strict hex color.
pub fn validate_hex(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

/// Canonical form of a valid hex color: no `#`, uppercase digits.
pub fn normalize_hex(s: &str) -> Option<String> {
    let s = s.trim();
    let caps = HEX_RE.captures(s)?;
    Some(caps[1].to_ascii_uppercase())
}
