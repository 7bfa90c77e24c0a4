//! Configuration loading and parsing
//!
//! Reads `boxbreath.toml` with `toml` + `serde`. Every table and key is
//! optional; anything missing falls back to the defaults.

pub mod loader;

use boxbreath_core::{CountdownConfig, SessionConfig};
use boxbreath_display::{SCREEN_COLS, SCREEN_ROWS};
use serde::Deserialize;

use crate::error::AppError;

pub use loader::{load_config, parse_config, DEFAULT_CONFIG_PATH};

/// Default frame interval (ms)
pub const DEFAULT_FRAME_MS: u64 = 50;

/// Rows the breathing screen needs besides the square
const CANVAS_ROW_MARGIN: usize = 7;

/// Terminal presentation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Interval between clock samples while a session runs (ms)
    pub frame_ms: u64,
    /// Redraw in place with ANSI escapes instead of appending frames
    pub ansi: bool,
    /// Width of the drawn square in columns
    pub canvas_cols: usize,
    /// Height of the drawn square in rows
    pub canvas_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_ms: DEFAULT_FRAME_MS,
            ansi: true,
            canvas_cols: 21,
            canvas_rows: 11,
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.frame_ms == 0 {
            return Err(AppError::Display("frame_ms must be greater than zero"));
        }
        if self.canvas_cols < 2 || self.canvas_cols > SCREEN_COLS {
            return Err(AppError::Display("canvas_cols must be between 2 and 40"));
        }
        if self.canvas_rows < 2 || self.canvas_rows + CANVAS_ROW_MARGIN > SCREEN_ROWS {
            return Err(AppError::Display("canvas_rows must be between 2 and 13"));
        }
        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub countdown: CountdownConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Validate every table
    pub fn validate(&self) -> Result<(), AppError> {
        self.session.validate()?;
        self.countdown.validate()?;
        self.display.validate()
    }
}
