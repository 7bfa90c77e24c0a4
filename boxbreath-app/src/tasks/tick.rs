//! Frame tick task
//!
//! Emits one clock sample per frame for the active subscription. Nothing is
//! emitted while no session is sampling the clock.

use embassy_time::{Duration, Instant, Ticker};
use tracing::{info, trace};

use crate::channels::{ACTIVE_SUBSCRIPTION, FRAME_SIGNAL};
use crate::clock::frame_sample;

/// Frame task - signals the controller with a timestamped sample
#[embassy_executor::task]
pub async fn tick_task(origin: Instant, frame_ms: u64) {
    info!(frame_ms, "tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(frame_ms));

    loop {
        ticker.next().await;

        // Elapsed time since the shared origin in milliseconds
        let now_ms = origin.elapsed().as_millis();

        if let Some(sample) = frame_sample(&ACTIVE_SUBSCRIPTION, now_ms) {
            trace!(now_ms, "frame");
            FRAME_SIGNAL.signal(sample);
        }
    }
}
