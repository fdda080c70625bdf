use crate::schema::SwatchConfig;

use super::helpers::validate_range;

pub(crate) fn validate_background(errors: &mut Vec<String>, config: &SwatchConfig) {
    validate_range(errors, "background.angle", config.background.angle, 0, 360);
}
