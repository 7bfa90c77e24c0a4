//! Main controller task
//!
//! Owns the session controller. Receives keyboard commands and frame
//! samples, feeds them to the session and lets the observer redraw.

use std::ops::ControlFlow;

use embassy_futures::select::{select, Either};
use embassy_time::Instant;
use tracing::{debug, info, warn};

use boxbreath_core::traits::{ClockSource, SessionObserver};
use boxbreath_core::{SessionController, SessionError};
use boxbreath_display::{BoxCanvas, Renderer};

use crate::channels::{ACTIVE_SUBSCRIPTION, FRAME_SIGNAL, INPUT_CHANNEL};
use crate::clock::FrameClock;
use crate::config::AppConfig;
use crate::input::Command;
use crate::observer::TerminalObserver;
use crate::terminal::TerminalBackend;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(config: &'static AppConfig, origin: Instant) {
    info!("controller task started");

    let clock = FrameClock::new(origin, &ACTIVE_SUBSCRIPTION);
    let canvas = BoxCanvas::new(config.display.canvas_cols, config.display.canvas_rows);
    let backend = TerminalBackend::new(std::io::stdout(), config.display.ansi);
    let observer = TerminalObserver::new(Renderer::new(canvas), backend, config.session);
    let mut session = SessionController::new(config.session, config.countdown, clock, observer);

    session.observer_mut().show_landing();

    loop {
        match select(INPUT_CHANNEL.receive(), FRAME_SIGNAL.wait()).await {
            Either::First(command) => {
                if apply_command(&mut session, command).is_break() {
                    info!("quitting");
                    std::process::exit(0);
                }
            }
            Either::Second(sample) => {
                if let Some(event) = session.on_sample(sample) {
                    debug!(?event, "timing event");
                }
            }
        }
    }
}

/// Apply a keyboard command to the session
///
/// Returns `Break` when the application should quit.
pub fn apply_command<C, O>(session: &mut SessionController<C, O>, command: Command) -> ControlFlow<()>
where
    C: ClockSource,
    O: SessionObserver,
{
    let result = match command {
        Command::Start => session.start(),
        Command::Restart => session.restart(),
        Command::Reset => session.reset(),
        Command::Exit => {
            session.exit();
            Ok(())
        }
        Command::Quit => {
            session.exit();
            return ControlFlow::Break(());
        }
    };

    match result {
        Ok(()) => {}
        Err(SessionError::InvalidTransition { state, event }) => {
            debug!(?state, ?event, "command ignored");
        }
        Err(e) => warn!("cannot start session: {}", e),
    }
    ControlFlow::Continue(())
}
