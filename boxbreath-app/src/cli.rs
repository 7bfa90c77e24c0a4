//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;

use crate::config::AppConfig;

/// Box breathing guide for the terminal
///
/// Keys (followed by Enter): s start, r restart, b back, x exit, q quit.
#[derive(Parser, Debug)]
#[command(name = "boxbreath", version, about)]
pub struct Cli {
    /// Config file (defaults to ./boxbreath.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of breaths per session
    #[arg(short, long)]
    pub breaths: Option<u32>,

    /// Duration of each phase in milliseconds
    #[arg(short, long)]
    pub phase_ms: Option<u32>,

    /// Append frames instead of redrawing in place
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the file config
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(breaths) = self.breaths {
            config.session.total_breaths = breaths;
        }
        if let Some(phase_ms) = self.phase_ms {
            config.session.phase_duration_ms = phase_ms;
        }
        if self.plain {
            config.display.ansi = false;
        }
    }
}
