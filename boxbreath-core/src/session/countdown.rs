//! Introductory countdown
//!
//! A one-shot timer shown before breathing starts: each digit from
//! `from` down to 1 for `step_ms`, then a blank settle beat. It is driven by
//! the same clock samples as the session but is independent of the cycle
//! engine.

use crate::config::CountdownConfig;

/// What the countdown shows at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CountdownStatus {
    /// A digit is on screen
    Showing(u8),
    /// Digits are done; short pause before the first inhale
    Settling,
    /// Countdown complete
    Done,
}

impl CountdownStatus {
    /// Digit for display (0 once the digits are over)
    pub fn digit(&self) -> u8 {
        match self {
            CountdownStatus::Showing(n) => *n,
            CountdownStatus::Settling | CountdownStatus::Done => 0,
        }
    }
}

/// Countdown status after `elapsed_ms` since it began
pub fn countdown_status(elapsed_ms: u64, config: &CountdownConfig) -> CountdownStatus {
    let step = config.step_ms.max(1) as u64;
    let digits_ms = config.from as u64 * step;

    if elapsed_ms < digits_ms {
        CountdownStatus::Showing(config.from - (elapsed_ms / step) as u8)
    } else if elapsed_ms < config.total_ms() {
        CountdownStatus::Settling
    } else {
        CountdownStatus::Done
    }
}

/// Countdown tracker reporting only status changes
#[derive(Debug, Clone)]
pub struct Countdown {
    config: CountdownConfig,
    last: Option<CountdownStatus>,
}

impl Countdown {
    pub fn new(config: CountdownConfig) -> Self {
        Self { config, last: None }
    }

    /// Forget the last reported status
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Last reported status
    pub fn status(&self) -> Option<CountdownStatus> {
        self.last
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    /// Update with time since the countdown began
    ///
    /// Returns the new status if it differs from the last one reported.
    pub fn update(&mut self, elapsed_ms: u64) -> Option<CountdownStatus> {
        let status = countdown_status(elapsed_ms, &self.config);
        if self.last == Some(status) {
            return None;
        }
        self.last = Some(status);
        Some(status)
    }
}
