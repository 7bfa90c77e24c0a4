//! ASCII box canvas
//!
//! Draws the breathing square onto a block of screen rows and places the
//! marker on its outline. Square-local coordinates from the core are scaled
//! onto the character grid; the outline's corners are exactly the square's
//! corners.

use boxbreath_core::Position;
use heapless::String;

use crate::screen::{Screen, LINE_LEN};

/// Glyph used for the marker
pub const MARKER: char = '@';

/// Character grid the square is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoxCanvas {
    /// Width in columns (including both corners)
    pub cols: usize,
    /// Height in rows (including both corners)
    pub rows: usize,
}

impl Default for BoxCanvas {
    /// Terminal cells are roughly twice as tall as wide, so a 2:1 grid looks
    /// square.
    fn default() -> Self {
        Self { cols: 21, rows: 11 }
    }
}

impl BoxCanvas {
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Grid cell (col, row) for a square-local position
    pub fn cell_for(&self, position: Position, square_size: f32) -> (usize, usize) {
        let scale = |v: f32, cells: usize| -> usize {
            if square_size <= 0.0 || cells < 2 {
                return 0;
            }
            let t = (v / square_size).clamp(0.0, 1.0);
            // Round to nearest cell; core has no float rounding in no_std
            let cell = (t * (cells - 1) as f32 + 0.5) as usize;
            cell.min(cells - 1)
        };
        (scale(position.x, self.cols), scale(position.y, self.rows))
    }

    /// Build one row of the outline, with the marker if it lies on this row
    pub fn row_text(&self, row: usize, marker: Option<(usize, usize)>) -> String<LINE_LEN> {
        let mut line = String::new();
        let last_row = self.rows.saturating_sub(1);
        let last_col = self.cols.saturating_sub(1);

        for col in 0..self.cols.min(LINE_LEN) {
            let c = if marker == Some((col, row)) {
                MARKER
            } else if (row == 0 || row == last_row) && (col == 0 || col == last_col) {
                '+'
            } else if row == 0 || row == last_row {
                '-'
            } else if col == 0 || col == last_col {
                '|'
            } else {
                ' '
            };
            let _ = line.push(c);
        }
        line
    }

    /// Draw the square into `screen` starting at `top`, indented by `left`
    pub fn draw(
        &self,
        screen: &mut Screen,
        top: usize,
        left: usize,
        marker: Option<Position>,
        square_size: f32,
    ) {
        let cell = marker.map(|p| self.cell_for(p, square_size));

        for row in 0..self.rows {
            let mut line: String<LINE_LEN> = String::new();
            for _ in 0..left {
                let _ = line.push(' ');
            }
            for c in self.row_text(row, cell).chars() {
                if line.push(c).is_err() {
                    break;
                }
            }
            screen.set_line(top + row, line.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxbreath_core::{position_for, Phase};

    #[test]
    fn test_corners_map_to_grid_corners() {
        let canvas = BoxCanvas::default();
        assert_eq!(canvas.cell_for(Position::new(0.0, 0.0), 300.0), (0, 0));
        assert_eq!(canvas.cell_for(Position::new(300.0, 0.0), 300.0), (20, 0));
        assert_eq!(canvas.cell_for(Position::new(300.0, 300.0), 300.0), (20, 10));
        assert_eq!(canvas.cell_for(Position::new(0.0, 300.0), 300.0), (0, 10));
    }

    #[test]
    fn test_midpoints() {
        let canvas = BoxCanvas::default();
        let top_mid = position_for(Phase::Inhale, 0.5, 300.0);
        assert_eq!(canvas.cell_for(top_mid, 300.0), (10, 0));
        let right_mid = position_for(Phase::Hold1, 0.5, 300.0);
        assert_eq!(canvas.cell_for(right_mid, 300.0), (20, 5));
    }

    #[test]
    fn test_outline_rows() {
        let canvas = BoxCanvas::new(5, 3);
        assert_eq!(canvas.row_text(0, None).as_str(), "+---+");
        assert_eq!(canvas.row_text(1, None).as_str(), "|   |");
        assert_eq!(canvas.row_text(2, None).as_str(), "+---+");
        assert_eq!(canvas.row_text(0, Some((2, 0))).as_str(), "+-@-+");
    }

    #[test]
    fn test_draw_places_marker() {
        let canvas = BoxCanvas::new(5, 3);
        let mut screen = Screen::new();
        let marker = position_for(Phase::Exhale, 0.0, 100.0);
        canvas.draw(&mut screen, 2, 1, Some(marker), 100.0);

        assert_eq!(screen.get_line(2), Some(" +---+"));
        assert_eq!(screen.get_line(3), Some(" |   |"));
        assert_eq!(screen.get_line(4), Some(" +---@"));
    }
}
