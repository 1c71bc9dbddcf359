//! Configuration schema types for the side menu.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod animation;
mod menu;

pub use animation::*;
pub use menu::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

pub const MIN_MENU_WIDTH: f64 = 1.0;
pub const MAX_MENU_WIDTH: f64 = 2000.0;
const DEFAULT_MENU_WIDTH: f64 = 300.0;

/// Root configuration for a side menu controller.
///
/// Read once when the controller is built; later edits are not observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SideMenuConfig {
    pub position: MenuPosition,
    pub direction: MenuDirection,
    /// Width of the revealed menu in points (valid range: 1.0-2000.0).
    pub menu_width: f64,
    /// Mirror the direction when the host lays out right-to-left.
    pub respect_language_direction: bool,
    /// Soft resistance when dragging past fully open.
    pub enable_rubber_effect: bool,
    pub enable_pan_gesture: bool,
    /// Close the menu (without animation) when the app is backgrounded.
    pub hide_menu_on_background: bool,
    pub status_bar_behavior: StatusBarBehavior,
    /// Cache key the initial content is registered under at load.
    pub default_cache_key: String,
    pub animation: AnimationConfig,
}

impl Default for SideMenuConfig {
    fn default() -> Self {
        Self {
            position: MenuPosition::Above,
            direction: MenuDirection::Left,
            menu_width: DEFAULT_MENU_WIDTH,
            respect_language_direction: true,
            enable_rubber_effect: true,
            enable_pan_gesture: true,
            hide_menu_on_background: false,
            status_bar_behavior: StatusBarBehavior::None,
            default_cache_key: "default".into(),
            animation: AnimationConfig::default(),
        }
    }
}

impl SideMenuConfig {
    /// `menu_width` forced into `MIN_MENU_WIDTH..=MAX_MENU_WIDTH`.
    /// A NaN width falls back to the default.
    pub fn clamped_menu_width(&self) -> f64 {
        if self.menu_width.is_nan() {
            return DEFAULT_MENU_WIDTH;
        }
        self.menu_width.clamp(MIN_MENU_WIDTH, MAX_MENU_WIDTH)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SideMenuConfig::default();
        assert_eq!(config.position, MenuPosition::Above);
        assert_eq!(config.direction, MenuDirection::Left);
        assert!((config.menu_width - 300.0).abs() < f64::EPSILON);
        assert!(config.respect_language_direction);
        assert!(config.enable_rubber_effect);
        assert!(config.enable_pan_gesture);
        assert!(!config.hide_menu_on_background);
        assert_eq!(config.status_bar_behavior, StatusBarBehavior::None);
        assert_eq!(config.default_cache_key, "default");
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: SideMenuConfig = toml::from_str("").unwrap();
        assert_eq!(config.position, MenuPosition::Above);
        assert!((config.animation.shadow_alpha - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_toml_with_nested_animation() {
        let toml_str = r#"
position = "side_by_side"
direction = "right"
menu_width = 260.0
status_bar_behavior = "hide_on_menu"

[animation]
shadow_enabled = false
"#;
        let config: SideMenuConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.position, MenuPosition::SideBySide);
        assert_eq!(config.direction, MenuDirection::Right);
        assert!((config.menu_width - 260.0).abs() < f64::EPSILON);
        assert_eq!(config.status_bar_behavior, StatusBarBehavior::HideOnMenu);
        assert!(!config.animation.shadow_enabled);
        // Defaults preserved
        assert!(config.enable_rubber_effect);
        assert!((config.animation.open_duration - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn clamped_menu_width_stays_positive() {
        for (raw, expected) in [
            (280.0, 280.0),
            (0.0, MIN_MENU_WIDTH),
            (-50.0, MIN_MENU_WIDTH),
            (f64::INFINITY, MAX_MENU_WIDTH),
            (f64::NAN, 300.0),
        ] {
            let config = SideMenuConfig {
                menu_width: raw,
                ..SideMenuConfig::default()
            };
            assert_eq!(config.clamped_menu_width(), expected, "raw = {raw}");
        }
    }

    #[test]
    fn unknown_position_is_rejected() {
        let result: Result<SideMenuConfig, _> = toml::from_str(r#"position = "diagonal""#);
        assert!(result.is_err());
    }
}
