//! Session control
//!
//! The controller owns the running/idle/finished lifecycle and is the only
//! place that starts or cancels the clock subscription.

pub mod controller;
pub mod countdown;

pub use controller::{SessionController, SessionError, TickSnapshot};
pub use countdown::{countdown_status, Countdown, CountdownStatus};
