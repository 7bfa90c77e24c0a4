//! Configuration type definitions
//!
//! A session is described by an immutable `SessionConfig` plus the
//! introductory `CountdownConfig`. Both are validated once when a session
//! starts; the engine never re-checks them while advancing.

use core::fmt;

use crate::cycle::PHASE_COUNT;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of breaths per session
pub const DEFAULT_TOTAL_BREATHS: u32 = 6;

/// Default duration of every phase (ms)
pub const DEFAULT_PHASE_DURATION_MS: u32 = 4_000;

/// Default side length of the square, in square-local units
pub const DEFAULT_SQUARE_SIZE: f32 = 300.0;

/// Default first countdown digit
pub const DEFAULT_COUNTDOWN_FROM: u8 = 3;

/// Default time each countdown digit stays on screen (ms)
pub const DEFAULT_COUNTDOWN_STEP_MS: u32 = 1_000;

/// Default blank beat between the last digit and the first inhale (ms)
pub const DEFAULT_COUNTDOWN_SETTLE_MS: u32 = 500;

/// Configuration errors, raised synchronously at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Phase duration must be greater than zero
    ZeroPhaseDuration,
    /// A session needs at least one breath
    ZeroBreaths,
    /// Breath count leaves no room for the finished breath index
    TooManyBreaths,
    /// Square size must be finite and greater than zero
    InvalidSquareSize,
    /// Countdown must start from at least 1
    ZeroCountdown,
    /// Countdown step must be greater than zero
    ZeroCountdownStep,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::ZeroPhaseDuration => "phase duration must be greater than zero",
            ConfigError::ZeroBreaths => "total breaths must be at least 1",
            ConfigError::TooManyBreaths => "total breaths must be below 4294967295",
            ConfigError::InvalidSquareSize => "square size must be a positive, finite number",
            ConfigError::ZeroCountdown => "countdown must start from at least 1",
            ConfigError::ZeroCountdownStep => "countdown step must be greater than zero",
        };
        f.write_str(msg)
    }
}

/// Session configuration
///
/// Immutable for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SessionConfig {
    /// Breaths to complete before the session finishes
    pub total_breaths: u32,
    /// Duration of each of the four phases (ms)
    pub phase_duration_ms: u32,
    /// Side length of the square the marker travels around
    pub square_size: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_breaths: DEFAULT_TOTAL_BREATHS,
            phase_duration_ms: DEFAULT_PHASE_DURATION_MS,
            square_size: DEFAULT_SQUARE_SIZE,
        }
    }
}

impl SessionConfig {
    /// Check the configuration before a session is allowed to start
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.phase_duration_ms == 0 {
            return Err(ConfigError::ZeroPhaseDuration);
        }
        if self.total_breaths == 0 {
            return Err(ConfigError::ZeroBreaths);
        }
        // Finished reports breath = total + 1, which must fit in u32
        if self.total_breaths == u32::MAX {
            return Err(ConfigError::TooManyBreaths);
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(ConfigError::InvalidSquareSize);
        }
        Ok(())
    }

    /// Duration of one full breath (all four phases) in ms
    pub fn breath_duration_ms(&self) -> u64 {
        self.phase_duration_ms as u64 * PHASE_COUNT as u64
    }

    /// Running time needed to finish the session (ms)
    pub fn total_duration_ms(&self) -> u64 {
        self.breath_duration_ms() * self.total_breaths as u64
    }

    /// Total number of phases in the session
    pub fn total_phases(&self) -> u64 {
        self.total_breaths as u64 * PHASE_COUNT as u64
    }
}

/// Introductory countdown configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CountdownConfig {
    /// First digit shown (counts down to 1)
    pub from: u8,
    /// Time each digit is shown (ms)
    pub step_ms: u32,
    /// Blank beat after the last digit (ms)
    pub settle_ms: u32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            from: DEFAULT_COUNTDOWN_FROM,
            step_ms: DEFAULT_COUNTDOWN_STEP_MS,
            settle_ms: DEFAULT_COUNTDOWN_SETTLE_MS,
        }
    }
}

impl CountdownConfig {
    /// Check the countdown parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.from == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        if self.step_ms == 0 {
            return Err(ConfigError::ZeroCountdownStep);
        }
        Ok(())
    }

    /// Time from countdown start until breathing begins (ms)
    pub fn total_ms(&self) -> u64 {
        self.from as u64 * self.step_ms as u64 + self.settle_ms as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(SessionConfig::default().validate(), Ok(()));
        assert_eq!(CountdownConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_default_session_length() {
        let config = SessionConfig::default();
        assert_eq!(config.breath_duration_ms(), 16_000);
        assert_eq!(config.total_duration_ms(), 96_000);
        assert_eq!(config.total_phases(), 24);
    }

    #[test]
    fn test_rejects_zero_phase_duration() {
        let config = SessionConfig {
            phase_duration_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroPhaseDuration));
    }

    #[test]
    fn test_rejects_zero_breaths() {
        let config = SessionConfig {
            total_breaths: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBreaths));
    }

    #[test]
    fn test_rejects_breath_count_without_finished_index() {
        let config = SessionConfig {
            total_breaths: u32::MAX,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooManyBreaths));

        let config = SessionConfig {
            total_breaths: u32::MAX - 1,
            phase_duration_ms: 1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));
        let finished = crate::cycle::finished_state(&config);
        assert!(finished.breath > config.total_breaths);
    }

    #[test]
    fn test_rejects_bad_square_size() {
        for size in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = SessionConfig {
                square_size: size,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidSquareSize));
        }
    }

    #[test]
    fn test_countdown_total() {
        let countdown = CountdownConfig::default();
        assert_eq!(countdown.total_ms(), 3_500);

        let bad = CountdownConfig {
            from: 0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::ZeroCountdown));

        let bad = CountdownConfig {
            step_ms: 0,
            ..Default::default()
        };
        assert_eq!(bad.validate(), Err(ConfigError::ZeroCountdownStep));
    }
}
