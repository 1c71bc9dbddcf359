//! Where the sidemenu config file lives, and seeding it on first run.

use sidemenu_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "sidemenu";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/sidemenu/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_DIR).join(FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

/// Write the commented default template to `path`, creating parent
/// directories as needed. An existing file is overwritten.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(write_failed(dir))?;
    }
    std::fs::write(path, default_config_toml()).map_err(write_failed(path))?;

    info!(path = %path.display(), "seeded default sidemenu config");
    Ok(())
}

fn write_failed(target: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = target.to_path_buf();
    move |source| ConfigError::WriteFailed { path, source }
}
