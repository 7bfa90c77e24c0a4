//! Boxbreath - Box Breathing Session Guide
//!
//! Terminal front end for the box breathing engine. A frame ticker samples
//! the clock while a session runs; the controller task turns samples and key
//! presses into session updates and redraws the screen.
//!
//! Logging goes to stderr and is controlled by `BOXBREATH_LOG`
//! (default `boxbreath=info`).

use clap::Parser;
use embassy_executor::Executor;
use embassy_time::Instant;
use static_cell::StaticCell;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod channels;
mod cli;
mod clock;
mod config;
mod error;
mod input;
mod observer;
mod tasks;
mod terminal;

use crate::cli::Cli;
use crate::config::{load_config, AppConfig};
use crate::error::AppError;

/// Environment variable holding the log filter
const LOG_ENV: &str = "BOXBREATH_LOG";

/// Filter used when `BOXBREATH_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "boxbreath=info";

// Executor and configuration must live forever for task references
static EXECUTOR: StaticCell<Executor> = StaticCell::new();
static CONFIG: StaticCell<AppConfig> = StaticCell::new();

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing();

    info!("Boxbreath starting...");

    // Load configuration, then apply command-line overrides
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);
    config.validate()?;
    info!(
        breaths = config.session.total_breaths,
        phase_ms = config.session.phase_duration_ms,
        total_ms = config.session.total_duration_ms(),
        "configuration loaded"
    );

    let config: &'static AppConfig = CONFIG.init(config);

    // Stdin has no async reader here, so keys are read on a plain thread
    std::thread::Builder::new()
        .name("input".into())
        .spawn(|| input::read_input(std::io::stdin().lock()))
        .map_err(AppError::Input)?;

    // Shared time origin for the frame ticker and the session clock
    let origin = Instant::now();

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner
            .spawn(tasks::tick_task(origin, config.display.frame_ms))
            .unwrap();
        spawner
            .spawn(tasks::controller_task(config, origin))
            .unwrap();

        info!("All tasks spawned");
    })
}

/// Install the stderr log subscriber
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
