//! Screen buffer types
//!
//! Provides a character-based screen buffer for text-mode displays.

use heapless::String;

/// Number of character rows on the standard screen
pub const SCREEN_ROWS: usize = 20;

/// Number of character columns on the standard screen
pub const SCREEN_COLS: usize = 40;

/// Maximum bytes per line
pub const LINE_LEN: usize = SCREEN_COLS;

/// Screen buffer for text-mode displays
///
/// Content is ASCII so one byte is one column. The buffer tracks whether it
/// changed since it was last drawn, so callers can skip redundant redraws.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    /// Current display content
    lines: [String<LINE_LEN>; SCREEN_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.lines()).finish()
    }
}

impl Screen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            dirty: true,
        }
    }

    /// Clear the entire screen
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.dirty = true;
    }

    /// Set the content of a specific row
    ///
    /// Text longer than the row is truncated. Only ASCII is kept intact;
    /// truncation never splits a multi-byte character.
    pub fn set_line(&mut self, row: usize, text: &str) {
        if row >= SCREEN_ROWS {
            return;
        }
        let line = &mut self.lines[row];
        line.clear();
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    /// Set a row with the text centered
    pub fn set_centered(&mut self, row: usize, text: &str) {
        let len = text.len().min(SCREEN_COLS);
        let pad = (SCREEN_COLS - len) / 2;
        let mut line: String<LINE_LEN> = String::new();
        for _ in 0..pad {
            let _ = line.push(' ');
        }
        for c in text.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.set_line(row, line.as_str());
    }

    /// Get the content of a specific row
    pub fn get_line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|s| s.as_str())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as clean (after rendering)
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Get all lines as an iterator
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|s| s.as_str())
    }

    /// Find the first row containing `needle`
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.lines().position(|line| line.contains(needle))
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        SCREEN_ROWS
    }

    /// Get number of columns
    pub const fn cols(&self) -> usize {
        SCREEN_COLS
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[");
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                defmt::write!(f, ", ");
            }
            defmt::write!(f, "{}", line.as_str());
        }
        defmt::write!(f, "]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_truncate() {
        let mut screen = Screen::new();
        screen.set_line(0, "Inhale");
        assert_eq!(screen.get_line(0), Some("Inhale"));

        let long = "0123456789012345678901234567890123456789EXTRA";
        screen.set_line(1, long);
        assert_eq!(screen.get_line(1).map(|l| l.len()), Some(SCREEN_COLS));

        // Out of range is ignored
        screen.set_line(SCREEN_ROWS, "nope");
        assert_eq!(screen.get_line(SCREEN_ROWS), None);
    }

    #[test]
    fn test_centered() {
        let mut screen = Screen::new();
        screen.set_centered(0, "Hold");
        let line = screen.get_line(0).unwrap();
        assert_eq!(line.trim(), "Hold");
        assert_eq!(line.find('H'), Some(18));
    }

    #[test]
    fn test_dirty_tracking() {
        let mut screen = Screen::new();
        assert!(screen.is_dirty());
        screen.mark_clean();
        assert!(!screen.is_dirty());
        screen.set_line(2, "x");
        assert!(screen.is_dirty());
    }

    #[test]
    fn test_find() {
        let mut screen = Screen::new();
        screen.set_line(5, "Breath 2 of 6");
        assert_eq!(screen.find("Breath"), Some(5));
        assert_eq!(screen.find("Exhale"), None);
    }
}
