//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = SideMenuConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_menu_width() {
    let mut config = SideMenuConfig::default();
    config.menu_width = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("menu_width"));
}

#[test]
fn catches_negative_menu_width() {
    let mut config = SideMenuConfig::default();
    config.menu_width = -120.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("menu_width"));
}

#[test]
fn catches_nan_menu_width() {
    let mut config = SideMenuConfig::default();
    config.menu_width = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn catches_blank_cache_key() {
    let mut config = SideMenuConfig::default();
    config.default_cache_key = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("default_cache_key"));
}

#[test]
fn catches_shadow_alpha_out_of_range() {
    let mut config = SideMenuConfig::default();
    config.animation.shadow_alpha = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.shadow_alpha"));
}

#[test]
fn catches_damping_out_of_range() {
    let mut config = SideMenuConfig::default();
    config.animation.damping_ratio = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.damping_ratio"));
}

#[test]
fn catches_negative_duration() {
    let mut config = SideMenuConfig::default();
    config.animation.hide_duration = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("animation.hide_duration"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SideMenuConfig::default();
    config.menu_width = 0.0;
    config.animation.shadow_alpha = 2.0;
    config.animation.open_duration = 10.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("menu_width"));
    assert!(err.contains("animation.shadow_alpha"));
    assert!(err.contains("animation.open_duration"));
    assert_eq!(err.matches("; ").count(), 2);
}
