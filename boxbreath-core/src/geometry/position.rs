//! Marker position on the square perimeter
//!
//! Each phase owns one edge of the square, traversed clockwise starting at
//! the top-left corner:
//!
//! ```text
//!        Inhale  ->
//!   (0,0) +---------+ (s,0)
//!         |         |
//!   Hold2 ^         v Hold1
//!         |         |
//!   (0,s) +---------+ (s,s)
//!          <- Exhale
//! ```
//!
//! The end corner of every edge is the start corner of the next one, so the
//! marker never jumps at a phase boundary.

use crate::config::SessionConfig;
use crate::cycle::{CycleState, Phase};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point in square-local coordinates (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Check whether the point lies on the perimeter of a square of `size`
    pub fn is_on_perimeter(&self, size: f32) -> bool {
        let inside = (0.0..=size).contains(&self.x) && (0.0..=size).contains(&self.y);
        let on_edge = self.x == 0.0 || self.y == 0.0 || self.x == size || self.y == size;
        inside && on_edge
    }
}

/// Corner where the given phase's edge begins
pub fn start_corner(phase: Phase, size: f32) -> Position {
    match phase {
        Phase::Inhale => Position::new(0.0, 0.0),
        Phase::Hold1 => Position::new(size, 0.0),
        Phase::Exhale => Position::new(size, size),
        Phase::Hold2 => Position::new(0.0, size),
    }
}

/// Map a phase and its progress to a point on the perimeter
///
/// Progress outside [0, 1] is clamped; NaN is treated as 0.
pub fn position_for(phase: Phase, progress: f32, size: f32) -> Position {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let travelled = p * size;

    match phase {
        Phase::Inhale => Position::new(travelled, 0.0),
        Phase::Hold1 => Position::new(size, travelled),
        Phase::Exhale => Position::new(size - travelled, size),
        Phase::Hold2 => Position::new(0.0, size - travelled),
    }
}

/// Marker position for a cycle state
pub fn position_for_state(state: &CycleState, config: &SessionConfig) -> Position {
    position_for(state.phase, state.progress(config), config.square_size)
}
