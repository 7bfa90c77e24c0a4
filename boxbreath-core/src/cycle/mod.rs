//! Phase/cycle timing
//!
//! The breathing cycle is four equal phases. The engine folds running time
//! into a `CycleState`; nothing here knows about clocks or screens.

pub mod engine;
pub mod phase;

pub use engine::{advance, finished_state, CycleState};
pub use phase::{Phase, PHASE_COUNT};
