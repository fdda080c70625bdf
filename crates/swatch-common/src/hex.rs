//! Hex color codec.
//!
//! Decoding is lenient and total: any string maps to some [`Color`].
//! Accepted forms after framing characters are stripped:
//! - `RGB` (each nibble expanded ×17, opaque)
//! - `RRGGBB` (opaque)
//! - `AARRGGBB` (alpha first)
//!
//! Every other length decodes to [`FALLBACK`]. Encoding always produces
//! uppercase `RRGGBB` with an optional trailing `AA`, so 3-digit and ARGB
//! inputs do not survive a decode/encode round trip verbatim.

use crate::types::Color;

/// Value produced for hex codes of unsupported length.
pub const FALLBACK: Color = Color::from_rgba(1, 1, 1, 1);

/// Decode a hex code into a [`Color`].
///
/// Leading and trailing non-alphanumeric characters (`#`, whitespace,
/// quotes) are stripped first. Digits are scanned up to the first non-hex
/// character; a string without leading hex digits scans as zero.
pub fn decode(hex: &str) -> Color {
    let hex = strip_framing(hex);
    let value = scan_hex(hex);

    match hex.chars().count() {
        3 => Color::from_rgba(
            ((value >> 8) & 0xF) as u8 * 17,
            ((value >> 4) & 0xF) as u8 * 17,
            (value & 0xF) as u8 * 17,
            255,
        ),
        6 => Color::from_rgba(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
            255,
        ),
        8 => Color::from_rgba(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
            ((value >> 24) & 0xFF) as u8,
        ),
        len => {
            tracing::trace!("hex code {hex:?} has unsupported length {len}, using fallback");
            FALLBACK
        }
    }
}

/// Encode unit-range channels as uppercase hex.
///
/// Channels are clamped to `0.0..=1.0` and rounded to the nearest byte.
/// A missing alpha is treated as fully opaque.
pub fn encode(r: f64, g: f64, b: f64, a: Option<f64>, include_alpha: bool) -> String {
    let mut out = format!(
        "{:02X}{:02X}{:02X}",
        unit_to_byte(r),
        unit_to_byte(g),
        unit_to_byte(b)
    );
    if include_alpha {
        out.push_str(&format!("{:02X}", unit_to_byte(a.unwrap_or(1.0))));
    }
    out
}

pub(crate) fn unit_to_byte(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn strip_framing(hex: &str) -> &str {
    hex.trim_matches(|c: char| !c.is_alphanumeric())
}

fn scan_hex(hex: &str) -> u64 {
    let end = hex
        .char_indices()
        .find(|(_, c)| !c.is_ascii_hexdigit())
        .map_or(hex.len(), |(i, _)| i);
    // 16 digits already fill a u64; anything longer only matters for length.
    let digits = &hex[..end.min(16)];
    u64::from_str_radix(digits, 16).unwrap_or(0)
}
