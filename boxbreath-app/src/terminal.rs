//! Terminal display backend
//!
//! Collects rows and writes the whole frame on flush. In ANSI mode each
//! frame redraws in place; otherwise frames are appended.

use std::io::Write;

use boxbreath_display::{DisplayBackend, DisplayError, SCREEN_COLS, SCREEN_ROWS};

/// Clear screen and move the cursor home
const ANSI_CLEAR_HOME: &str = "\x1b[2J\x1b[H";

/// `DisplayBackend` writing to a terminal
pub struct TerminalBackend<W: Write> {
    out: W,
    rows: Vec<String>,
    ansi: bool,
}

impl<W: Write> TerminalBackend<W> {
    pub fn new(out: W, ansi: bool) -> Self {
        Self {
            out,
            rows: vec![String::new(); SCREEN_ROWS],
            ansi,
        }
    }

    /// Underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> DisplayBackend for TerminalBackend<W> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.rows {
            row.clear();
        }
        Ok(())
    }

    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        let col = col as usize;
        let line = self
            .rows
            .get_mut(row as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;
        if col >= SCREEN_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        // Rows only ever hold ASCII, so byte and column offsets agree
        while line.len() < col {
            line.push(' ');
        }
        line.truncate(col);
        line.extend(text.chars().take(SCREEN_COLS - col));
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        let mut frame = String::new();
        if self.ansi {
            frame.push_str(ANSI_CLEAR_HOME);
        }
        let used = self
            .rows
            .iter()
            .rposition(|row| !row.is_empty())
            .map_or(0, |last| last + 1);
        for row in &self.rows[..used] {
            frame.push_str(row.trim_end());
            frame.push('\n');
        }
        if !self.ansi {
            frame.push_str(&"-".repeat(SCREEN_COLS));
            frame.push('\n');
        }

        self.out
            .write_all(frame.as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }

    fn is_ready(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxbreath_display::{present, Screen};

    fn output(backend: &TerminalBackend<Vec<u8>>) -> String {
        String::from_utf8(backend.get_ref().clone()).unwrap()
    }

    #[test]
    fn test_plain_frame() {
        let mut backend = TerminalBackend::new(Vec::new(), false);
        backend.draw_text(0, 0, "Inhale").unwrap();
        backend.draw_text(2, 4, "Breath 1 of 6").unwrap();
        backend.flush().unwrap();

        let text = output(&backend);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Inhale"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("    Breath 1 of 6"));
        assert_eq!(lines.next(), Some("-".repeat(SCREEN_COLS).as_str()));
    }

    #[test]
    fn test_ansi_frame_starts_with_clear() {
        let mut backend = TerminalBackend::new(Vec::new(), true);
        backend.draw_text(1, 0, "Hold").unwrap();
        backend.flush().unwrap();
        assert!(output(&backend).starts_with(ANSI_CLEAR_HOME));
    }

    #[test]
    fn test_out_of_range() {
        let mut backend = TerminalBackend::new(Vec::new(), false);
        assert_eq!(
            backend.draw_text(SCREEN_ROWS as u8, 0, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
        assert_eq!(
            backend.draw_text(0, SCREEN_COLS as u8, "x"),
            Err(DisplayError::InvalidCoordinates)
        );
    }

    #[test]
    fn test_present_screen() {
        let mut screen = Screen::new();
        screen.set_centered(5, "Well done");
        let mut backend = TerminalBackend::new(Vec::new(), false);

        assert_eq!(present(&mut screen, &mut backend), Ok(true));
        assert!(output(&backend).contains("Well done"));
    }
}
