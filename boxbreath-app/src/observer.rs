//! Session observer for the terminal
//!
//! Renders every notification onto the screen buffer, pushes it to the
//! backend and logs lifecycle changes.

use boxbreath_core::traits::SessionObserver;
use boxbreath_core::{Phase, SessionConfig, State, TickSnapshot};
use boxbreath_display::{present, DisplayBackend, Renderer};
use tracing::{debug, info, trace, warn};

/// Observer that draws the session on a `DisplayBackend`
pub struct TerminalObserver<B: DisplayBackend> {
    renderer: Renderer,
    backend: B,
    config: SessionConfig,
}

impl<B: DisplayBackend> TerminalObserver<B> {
    pub fn new(renderer: Renderer, backend: B, config: SessionConfig) -> Self {
        Self {
            renderer,
            backend,
            config,
        }
    }

    /// Draw the landing screen
    pub fn show_landing(&mut self) {
        self.renderer.render_landing(&self.config);
        self.refresh();
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Push the screen if it changed
    fn refresh(&mut self) {
        if let Err(e) = present(self.renderer.screen_mut(), &mut self.backend) {
            warn!("display update failed: {}", e);
        }
    }
}

impl<B: DisplayBackend> SessionObserver for TerminalObserver<B> {
    fn on_countdown(&mut self, remaining: u8) {
        debug!(remaining, "countdown");
        self.renderer.render_countdown(remaining);
        self.refresh();
    }

    fn on_tick(&mut self, snapshot: &TickSnapshot) {
        trace!(
            phase = ?snapshot.phase(),
            progress = snapshot.progress,
            session = snapshot.cycle.session_progress(&self.config),
            x = snapshot.position.x,
            y = snapshot.position.y,
            "frame"
        );
        self.renderer.render_breathing(snapshot, self.config.square_size);
        self.refresh();
    }

    fn on_phase_change(&mut self, phase: Phase, breath: u32) {
        debug!(?phase, breath, "phase");
    }

    fn on_session_complete(&mut self) {
        info!(breaths = self.config.total_breaths, "session complete");
        self.renderer.render_complete();
        self.refresh();
    }

    fn on_state_change(&mut self, from: State, to: State) {
        info!(?from, ?to, "session state");
        if to == State::Idle {
            self.show_landing();
        }
    }
}
