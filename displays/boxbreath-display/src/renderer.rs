//! Screen rendering
//!
//! Builds screens for the different session states. All text is ASCII so it
//! fits the byte-per-column screen buffer.

use core::fmt::Write;

use boxbreath_core::{Phase, SessionConfig, TickSnapshot};
use heapless::String;

use crate::canvas::BoxCanvas;
use crate::screen::{Screen, LINE_LEN, SCREEN_COLS};

/// Row of the phase label on the breathing screen
const LABEL_ROW: usize = 1;

/// First row of the square on the breathing screen
const BOX_TOP: usize = 3;

/// Row of the key hints at the bottom of most screens
const HINT_ROW: usize = 18;

/// Screen renderer for the session states
pub struct Renderer {
    screen: Screen,
    canvas: BoxCanvas,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(BoxCanvas::default())
    }
}

impl Renderer {
    /// Create a renderer drawing the square on `canvas`
    pub fn new(canvas: BoxCanvas) -> Self {
        Self {
            screen: Screen::new(),
            canvas,
        }
    }

    /// Get the current screen buffer
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Get the screen buffer for marking it clean after drawing
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// Render the landing screen
    pub fn render_landing(&mut self, config: &SessionConfig) {
        self.screen.clear();
        self.screen.set_centered(3, "Box Breathing");
        self.screen.set_centered(5, "A simple breathing exercise");
        self.screen.set_centered(6, "to calm your mind and body.");
        self.screen.set_centered(8, "Inhale > Hold > Exhale > Hold");

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "Each for {} counts.", phase_counts(config));
        self.screen.set_centered(9, &line);

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(line, "{} breaths", config.total_breaths);
        self.screen.set_centered(11, &line);

        self.screen.set_centered(HINT_ROW, "[s] Start   [q] Quit");
    }

    /// Render the countdown screen
    ///
    /// `digit` 0 leaves the digit row blank (settle beat).
    pub fn render_countdown(&mut self, digit: u8) {
        self.screen.clear();
        if digit > 0 {
            let mut line: String<LINE_LEN> = String::new();
            let _ = write!(line, "{}", digit);
            self.screen.set_centered(8, &line);
        }
        self.screen.set_centered(11, "Get ready to breathe...");
        self.screen.set_centered(HINT_ROW, "[x] Exit");
    }

    /// Render the breathing screen for one snapshot
    pub fn render_breathing(&mut self, snapshot: &TickSnapshot, square_size: f32) {
        self.screen.clear();
        self.screen.set_centered(LABEL_ROW, phase_label(snapshot.phase()));

        let left = SCREEN_COLS.saturating_sub(self.canvas.cols) / 2;
        self.canvas.draw(
            &mut self.screen,
            BOX_TOP,
            left,
            Some(snapshot.position),
            square_size,
        );

        let mut line: String<LINE_LEN> = String::new();
        let _ = write!(
            line,
            "Breath {} of {}",
            snapshot.display_breath(),
            snapshot.total_breaths
        );
        self.screen.set_centered(BOX_TOP + self.canvas.rows + 1, &line);

        self.screen.set_centered(HINT_ROW, "[r] Restart   [x] Exit");
    }

    /// Render the completion screen
    pub fn render_complete(&mut self) {
        self.screen.clear();
        self.screen.set_centered(5, "Well done");
        self.screen.set_centered(7, "Take a moment to notice");
        self.screen.set_centered(8, "how you feel.");
        self.screen.set_centered(HINT_ROW, "[r] Restart   [x] Exit");
    }
}

/// Guidance text for a phase
pub fn phase_label(phase: Phase) -> &'static str {
    phase.label()
}

/// Whole seconds per phase, as "counts" on the landing screen
fn phase_counts(config: &SessionConfig) -> u32 {
    ((config.phase_duration_ms + 500) / 1000).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxbreath_core::{advance, CycleState};

    fn snapshot_at(running_ms: u64) -> TickSnapshot {
        let config = SessionConfig::default();
        let cycle = advance(running_ms, CycleState::initial(), &config);
        TickSnapshot::from_cycle(cycle, &config)
    }

    #[test]
    fn test_landing() {
        let mut renderer = Renderer::default();
        renderer.render_landing(&SessionConfig::default());
        let screen = renderer.screen();
        assert!(screen.find("Box Breathing").is_some());
        assert!(screen.find("Each for 4 counts.").is_some());
        assert!(screen.find("6 breaths").is_some());
    }

    #[test]
    fn test_countdown_digit_and_settle() {
        let mut renderer = Renderer::default();
        renderer.render_countdown(3);
        assert_eq!(renderer.screen().get_line(8).map(str::trim), Some("3"));

        renderer.render_countdown(0);
        assert_eq!(renderer.screen().get_line(8), Some(""));
        assert!(renderer.screen().find("Get ready").is_some());
    }

    #[test]
    fn test_breathing_screen() {
        let mut renderer = Renderer::default();
        let snapshot = snapshot_at(16_000 + 4_000 + 2_000);
        renderer.render_breathing(&snapshot, 300.0);

        let screen = renderer.screen();
        assert_eq!(screen.get_line(LABEL_ROW).map(str::trim), Some("Hold"));
        assert!(screen.find("Breath 2 of 6").is_some());

        // Hold1 halfway: marker on the right edge, middle row of the box
        let marker_row = screen.find("@").unwrap();
        assert_eq!(marker_row, BOX_TOP + 5);
        let line = screen.get_line(marker_row).unwrap();
        assert_eq!(line.find('@'), Some(9 + 20));
    }

    #[test]
    fn test_breath_number_capped_when_finished() {
        let mut renderer = Renderer::default();
        let snapshot = snapshot_at(96_000);
        assert!(snapshot.cycle.finished);
        renderer.render_breathing(&snapshot, 300.0);
        assert!(renderer.screen().find("Breath 6 of 6").is_some());
    }

    #[test]
    fn test_complete() {
        let mut renderer = Renderer::default();
        renderer.render_complete();
        assert!(renderer.screen().find("Well done").is_some());
        assert!(renderer.screen().find("[r] Restart").is_some());
    }

    #[test]
    fn test_phase_counts_rounding() {
        let config = SessionConfig {
            phase_duration_ms: 4_400,
            ..Default::default()
        };
        assert_eq!(phase_counts(&config), 4);
        let config = SessionConfig {
            phase_duration_ms: 100,
            ..Default::default()
        };
        assert_eq!(phase_counts(&config), 1);
    }
}
