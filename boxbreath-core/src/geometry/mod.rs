//! Box geometry
//!
//! Maps breathing phases onto the edges of the square.

pub mod position;

pub use position::{position_for, position_for_state, start_corner, Position};
