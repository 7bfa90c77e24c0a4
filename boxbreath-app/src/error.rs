//! Application errors

use std::path::PathBuf;

use boxbreath_core::ConfigError;

/// Errors that stop the application before the first session
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Config file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Session or countdown parameters rejected
    #[error("invalid session settings: {0}")]
    Config(ConfigError),

    /// Display parameters rejected
    #[error("invalid display settings: {0}")]
    Display(&'static str),

    /// Stdin reader thread could not be spawned
    #[error("failed to start input thread: {0}")]
    Input(#[source] std::io::Error),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e)
    }
}
