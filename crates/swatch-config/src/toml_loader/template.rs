//! Default config file template.

/// Generate the default TOML config content with comments.
pub(super) fn default_config_toml() -> &'static str {
    r##"# Swatch Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[palette]
# candidate_count = 15   # 0-64
# seed = 42              # fixed palette; omit for a fresh one each run

[palette.reference]
# name = "Orange"
# hex = "FFA500"         # RGB, RRGGBB or AARRGGBB, optional leading #

[background]
# type = "linear"        # linear, radial
# angle = 180            # 0-360

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
}
