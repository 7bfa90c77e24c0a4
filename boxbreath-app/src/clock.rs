//! Frame clock
//!
//! `ClockSource` backed by embassy-time. The controller task owns the
//! `FrameClock`; the tick task only reads the shared active-subscription
//! slot and emits a sample for it each frame. Unsubscribing clears the slot,
//! so no further samples are produced for that id.

use core::sync::atomic::{AtomicU32, Ordering};

use boxbreath_core::traits::{ClockSample, ClockSource, SubscriptionId};
use embassy_time::Instant;

/// Marker for "no subscription" in the shared slot
const NO_SUBSCRIPTION: u32 = 0;

/// Clock source driven by the frame ticker
pub struct FrameClock<'a> {
    origin: Instant,
    next_id: u32,
    active: &'a AtomicU32,
}

impl<'a> FrameClock<'a> {
    /// Create a clock measuring from `origin`, publishing into `active`
    pub fn new(origin: Instant, active: &'a AtomicU32) -> Self {
        active.store(NO_SUBSCRIPTION, Ordering::Release);
        Self {
            origin,
            next_id: 1,
            active,
        }
    }

    /// Currently published subscription
    pub fn active(&self) -> Option<SubscriptionId> {
        active_subscription(self.active)
    }
}

impl ClockSource for FrameClock<'_> {
    fn now_ms(&self) -> u64 {
        Instant::now()
            .checked_duration_since(self.origin)
            .map(|d| d.as_millis())
            .unwrap_or(0)
    }

    fn subscribe(&mut self) -> SubscriptionId {
        let id = self.next_id;
        // Skip the "none" marker on wrap
        self.next_id = match id.wrapping_add(1) {
            NO_SUBSCRIPTION => 1,
            next => next,
        };
        self.active.store(id, Ordering::Release);
        SubscriptionId(id)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        let _ = self.active.compare_exchange(
            id.0,
            NO_SUBSCRIPTION,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }
}

/// Read the shared slot
pub fn active_subscription(slot: &AtomicU32) -> Option<SubscriptionId> {
    match slot.load(Ordering::Acquire) {
        NO_SUBSCRIPTION => None,
        id => Some(SubscriptionId(id)),
    }
}

/// Sample to emit for this frame, if anything is subscribed
pub fn frame_sample(slot: &AtomicU32, now_ms: u64) -> Option<ClockSample> {
    active_subscription(slot).map(|subscription| ClockSample {
        subscription,
        now_ms,
    })
}
