//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Side menu configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

# position = "above"                  # above | under | side_by_side
# direction = "left"                  # left | right
# menu_width = 300.0                  # 1.0-2000.0
# respect_language_direction = true
# enable_rubber_effect = true
# enable_pan_gesture = true
# hide_menu_on_background = false
# status_bar_behavior = "none"        # none | slide | fade | hide_on_menu
# default_cache_key = "default"

[animation]
# open_duration = 0.4                 # seconds, 0.0-5.0
# hide_duration = 0.4                 # seconds, 0.0-5.0
# damping_ratio = 1.0                 # 0.0-1.0
# initial_spring_velocity = 1.0       # 0.0-10.0
# shadow_enabled = true
# shadow_alpha = 0.2                  # 0.0-1.0
"##
    .to_string()
}
