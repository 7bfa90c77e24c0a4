//! Board-agnostic core logic for the Boxbreath breathing guide
//!
//! This crate contains all session logic that does not depend on a
//! particular clock or screen:
//!
//! - Phase/cycle timing engine (elapsed time to phase, progress, breath)
//! - Perimeter geometry for the box marker
//! - Session state machine and controller
//! - Clock and observer traits for the surrounding application
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod cycle;
pub mod geometry;
pub mod session;
pub mod state;
pub mod traits;

pub use config::{ConfigError, CountdownConfig, SessionConfig};
pub use cycle::{advance, CycleState, Phase};
pub use geometry::{position_for, Position};
pub use session::{SessionController, SessionError, TickSnapshot};
pub use state::{Event, State};
