use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no platform config directory to hold sidemenu/config.toml")]
    NoConfigDir,

    #[error("cannot write default config {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("no content cached for identifier '{0}'")]
    UnknownIdentifier(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("{0} panel must be set before the controller is loaded")]
    MissingPanel(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum SideMenuError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Controller(#[from] ControllerError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
