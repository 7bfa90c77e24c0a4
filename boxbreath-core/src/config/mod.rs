//! Configuration types
//!
//! Session and countdown parameters, with validation performed at start.

pub mod types;

pub use types::*;
