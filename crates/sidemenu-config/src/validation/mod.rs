//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod animation;
mod helpers;
mod menu;

#[cfg(test)]
mod tests;

use crate::schema::SideMenuConfig;
use sidemenu_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SideMenuConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    menu::validate_menu(&mut errors, config);
    animation::validate_animation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
