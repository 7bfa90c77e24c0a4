//! Display backend trait
//!
//! Defines the interface for different display types.

use crate::screen::Screen;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

impl core::fmt::Display for DisplayError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Communication => write!(f, "display communication failed"),
            Self::InvalidCoordinates => write!(f, "text outside the display area"),
            Self::NotInitialized => write!(f, "display not initialized"),
        }
    }
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for rendering rows of text.
pub trait DisplayBackend {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Draw text at the specified row and column
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number in characters (0-based)
    /// - `text`: Text to display
    fn draw_text(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}

/// Push a screen to a backend if it changed, then mark it clean
///
/// Returns whether anything was drawn.
pub fn present<B: DisplayBackend>(screen: &mut Screen, backend: &mut B) -> Result<bool, DisplayError> {
    if !screen.is_dirty() {
        return Ok(false);
    }
    if !backend.is_ready() {
        return Err(DisplayError::NotInitialized);
    }

    let (cols, rows) = backend.dimensions();
    if (cols as usize) < screen.cols() || (rows as usize) < screen.rows() {
        return Err(DisplayError::InvalidCoordinates);
    }

    backend.clear()?;
    for (row, line) in screen.lines().enumerate() {
        if !line.is_empty() {
            backend.draw_text(row as u8, 0, line)?;
        }
    }
    backend.flush()?;
    screen.mark_clean();
    Ok(true)
}
