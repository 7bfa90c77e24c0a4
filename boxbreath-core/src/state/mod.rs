//! Session state machine
//!
//! Idle → Counting → Running → Finished, with restart, reset and exit
//! edges. The machine is explicit and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
