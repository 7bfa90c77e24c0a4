//! Clock source abstraction
//!
//! The session controller never reads time on its own. It subscribes to a
//! clock source, and the surrounding application feeds it the samples that
//! subscription produces (one per animation frame or timer tick).
//!
//! Every sample carries the id of the subscription that produced it. Once a
//! subscription is released, samples still in flight for it are dropped by
//! the controller, so a cancelled loop can never touch session state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a clock subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubscriptionId(pub u32);

/// One elapsed-time sample delivered to a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockSample {
    /// Subscription this sample belongs to
    pub subscription: SubscriptionId,
    /// Monotonic time of the sample (ms)
    pub now_ms: u64,
}

/// Source of monotonic time samples
pub trait ClockSource {
    /// Current monotonic time (ms)
    fn now_ms(&self) -> u64;

    /// Start delivering samples; returns the id they will carry
    fn subscribe(&mut self) -> SubscriptionId;

    /// Stop delivering samples for `id`
    ///
    /// Must take effect before returning.
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Hand-driven clock for tests and offline simulation
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now_ms: u64,
    next_id: u32,
    active: Option<SubscriptionId>,
}

impl ManualClock {
    /// Create a clock at time zero with no subscription
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            active: None,
        }
    }

    /// Move the clock forward
    pub fn advance(&mut self, ms: u64) {
        self.now_ms = self.now_ms.saturating_add(ms);
    }

    /// Set the clock to an absolute time (may go backwards)
    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }

    /// Currently active subscription
    pub fn active(&self) -> Option<SubscriptionId> {
        self.active
    }

    /// Sample for the active subscription at the current time
    pub fn sample(&self) -> Option<ClockSample> {
        self.active.map(|subscription| ClockSample {
            subscription,
            now_ms: self.now_ms,
        })
    }
}

impl ClockSource for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.max(1));
        self.next_id = id.0.wrapping_add(1);
        self.active = Some(id);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        if self.active == Some(id) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_subscription() {
        let mut clock = ManualClock::new();
        assert!(clock.sample().is_none());

        let id = clock.subscribe();
        clock.advance(250);
        assert_eq!(
            clock.sample(),
            Some(ClockSample {
                subscription: id,
                now_ms: 250
            })
        );

        clock.unsubscribe(id);
        assert!(clock.sample().is_none());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut clock = ManualClock::new();
        let first = clock.subscribe();
        clock.unsubscribe(first);
        let second = clock.subscribe();
        assert_ne!(first, second);
    }

    #[test]
    fn test_stale_unsubscribe_keeps_current() {
        let mut clock = ManualClock::new();
        let first = clock.subscribe();
        let second = clock.subscribe();
        clock.unsubscribe(first);
        assert_eq!(clock.active(), Some(second));
    }
}
