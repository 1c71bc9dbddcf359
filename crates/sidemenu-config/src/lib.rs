//! Side menu configuration.
//!
//! Provides TOML-based configuration for the side menu controller with
//! validation. All fields use sensible defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use sidemenu_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AnimationConfig, MenuDirection, MenuPosition, SideMenuConfig, StatusBarBehavior,
    CONFIG_SCHEMA_VERSION, MAX_ANIMATION_SECS, MAX_MENU_WIDTH, MIN_MENU_WIDTH,
};

use sidemenu_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a documented default file if none exists.
pub fn load_config() -> Result<SideMenuConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SideMenuConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
