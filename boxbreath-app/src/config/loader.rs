//! Configuration file loading
//!
//! An explicitly given path must exist. Without one, `boxbreath.toml` in the
//! working directory is used if present, otherwise the built-in defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use super::AppConfig;
use crate::error::AppError;

/// Config file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "boxbreath.toml";

/// Parse configuration text
pub fn parse_config(text: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(text)?;
    Ok(config)
}

/// Load configuration from `path`, or from the default location
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (Path::new(DEFAULT_CONFIG_PATH), false),
    };

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(AppError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let config = parse_config(&text)?;
    info!(path = %path.display(), "loaded configuration");
    log_config_summary(&config);
    Ok(config)
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &AppConfig) {
    debug!(
        breaths = config.session.total_breaths,
        phase_ms = config.session.phase_duration_ms,
        "session"
    );
    debug!(
        from = config.countdown.from,
        step_ms = config.countdown.step_ms,
        settle_ms = config.countdown.settle_ms,
        "countdown"
    );
    debug!(
        frame_ms = config.display.frame_ms,
        ansi = config.display.ansi,
        "display"
    );
}
