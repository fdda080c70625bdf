//! Palette validation: candidate count and reference color.

use crate::colors;
use crate::schema::{SwatchConfig, MAX_CANDIDATES};

use super::helpers::validate_range;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &SwatchConfig) {
    validate_range(
        errors,
        "palette.candidate_count",
        config.palette.candidate_count,
        0,
        MAX_CANDIDATES,
    );

    let reference = &config.palette.reference;
    if !colors::validate_hex(&reference.hex) {
        errors.push(format!(
            "palette.reference.hex = {:?} is not a valid hex color",
            reference.hex
        ));
    }
    if reference.name.trim().is_empty() {
        errors.push("palette.reference.name must not be empty".into());
    }
}
