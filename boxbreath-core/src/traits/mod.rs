//! Abstraction traits
//!
//! Seams between the session logic and the application: where time comes
//! from and where notifications go.

pub mod clock;
pub mod observer;

pub use clock::{ClockSample, ClockSource, ManualClock, SubscriptionId};
pub use observer::SessionObserver;
