//! Phase/cycle timing engine
//!
//! Converts accumulated running time into the current phase, the progress
//! within that phase, the breath counter and the finished flag.
//!
//! The engine is a pure function over an owned `CycleState`. Time is kept in
//! integer milliseconds, so folding a span of time in one sample or in many
//! small ones lands on exactly the same state.

use super::phase::{Phase, PHASE_COUNT};
use crate::config::SessionConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of where a session is within its breathing cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CycleState {
    /// Current phase
    pub phase: Phase,
    /// Time spent in the current phase (ms), always below the phase duration
    /// while not finished
    pub phase_elapsed_ms: u32,
    /// Current breath, 1-based. Exceeds the configured total once finished.
    pub breath: u32,
    /// Set once the last breath's last phase has completed
    pub finished: bool,
    /// Running time already folded into this state (ms)
    pub elapsed_ms: u64,
}

impl Default for CycleState {
    fn default() -> Self {
        Self::initial()
    }
}

impl CycleState {
    /// State at the first instant of a session
    pub const fn initial() -> Self {
        Self {
            phase: Phase::Inhale,
            phase_elapsed_ms: 0,
            breath: 1,
            finished: false,
            elapsed_ms: 0,
        }
    }

    /// Phase index within the breath (0..=3)
    pub fn phase_index(&self) -> u8 {
        self.phase.index()
    }

    /// Number of phases completed since the session started
    pub fn phase_ordinal(&self) -> u64 {
        (self.breath.saturating_sub(1) as u64) * PHASE_COUNT as u64 + self.phase.index() as u64
    }

    /// Progress within the current phase, clamped to [0, 1]
    pub fn progress(&self, config: &SessionConfig) -> f32 {
        if config.phase_duration_ms == 0 {
            return 0.0;
        }
        let ratio = self.phase_elapsed_ms as f32 / config.phase_duration_ms as f32;
        ratio.clamp(0.0, 1.0)
    }

    /// Fraction of the whole session already completed, clamped to [0, 1]
    pub fn session_progress(&self, config: &SessionConfig) -> f32 {
        if self.finished {
            return 1.0;
        }
        let total = config.total_duration_ms();
        if total == 0 {
            return 0.0;
        }
        (self.elapsed_ms as f32 / total as f32).clamp(0.0, 1.0)
    }

    /// Breaths fully completed so far
    pub fn breaths_completed(&self, config: &SessionConfig) -> u32 {
        self.breath.saturating_sub(1).min(config.total_breaths)
    }

    /// Running time left until the session finishes (ms)
    pub fn remaining_ms(&self, config: &SessionConfig) -> u64 {
        if self.finished {
            return 0;
        }
        config.total_duration_ms().saturating_sub(self.elapsed_ms)
    }
}

/// Advance a cycle state to the given running time
///
/// `now_ms` is the running time since the session entered its breathing
/// phase. Samples earlier than the time already folded in count as zero
/// progress. Any amount of time may pass between samples; whole phases are
/// folded in arithmetically and the finished transition is never skipped.
///
/// A finished state is returned unchanged. The configuration is assumed to
/// have been validated at session start; a zero duration or zero breath count
/// leaves the state untouched.
pub fn advance(now_ms: u64, state: CycleState, config: &SessionConfig) -> CycleState {
    if state.finished || config.phase_duration_ms == 0 || config.total_breaths == 0 {
        return state;
    }

    let delta = now_ms.saturating_sub(state.elapsed_ms);
    if delta == 0 {
        return state;
    }

    let duration = config.phase_duration_ms as u64;
    let within = state.phase_elapsed_ms as u64 + delta;

    if within < duration {
        return CycleState {
            phase_elapsed_ms: within as u32,
            elapsed_ms: now_ms,
            ..state
        };
    }

    let ordinal = state.phase_ordinal().saturating_add(within / duration);

    if ordinal >= config.total_phases() {
        // Pin the finished state to the exact finishing instant so that every
        // sampling pattern converges on the same terminal value.
        return finished_state(config);
    }

    CycleState {
        phase: Phase::from_index((ordinal % PHASE_COUNT as u64) as u8),
        phase_elapsed_ms: (within % duration) as u32,
        breath: breath_for_ordinal(ordinal),
        finished: false,
        elapsed_ms: now_ms,
    }
}

/// Terminal state reached after the last breath
pub fn finished_state(config: &SessionConfig) -> CycleState {
    CycleState {
        phase: Phase::Inhale,
        phase_elapsed_ms: 0,
        breath: breath_for_ordinal(config.total_phases()),
        finished: true,
        elapsed_ms: config.total_duration_ms(),
    }
}

fn breath_for_ordinal(ordinal: u64) -> u32 {
    let breath = ordinal / PHASE_COUNT as u64 + 1;
    breath.min(u32::MAX as u64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> SessionConfig {
        SessionConfig {
            total_breaths: 6,
            phase_duration_ms: 4_000,
            square_size: 300.0,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = CycleState::initial();
        assert_eq!(state.phase, Phase::Inhale);
        assert_eq!(state.breath, 1);
        assert_eq!(state.phase_elapsed_ms, 0);
        assert!(!state.finished);
        assert_eq!(state.progress(&config()), 0.0);
    }

    #[test]
    fn test_progress_within_phase() {
        let cfg = config();
        let state = advance(1_000, CycleState::initial(), &cfg);
        assert_eq!(state.phase, Phase::Inhale);
        assert_eq!(state.phase_elapsed_ms, 1_000);
        assert_eq!(state.progress(&cfg), 0.25);
    }

    #[test]
    fn test_boundary_reports_next_phase_at_zero() {
        let cfg = config();
        let state = advance(4_000, CycleState::initial(), &cfg);
        assert_eq!(state.phase, Phase::Hold1);
        assert_eq!(state.phase_elapsed_ms, 0);
        assert_eq!(state.progress(&cfg), 0.0);
    }

    #[test]
    fn test_overflow_is_carried() {
        let cfg = config();
        let state = advance(3_990, CycleState::initial(), &cfg);
        let state = advance(4_025, state, &cfg);
        assert_eq!(state.phase, Phase::Hold1);
        assert_eq!(state.phase_elapsed_ms, 25);
    }

    #[test]
    fn test_breath_increments_after_hold2() {
        let cfg = config();
        let state = advance(15_999, CycleState::initial(), &cfg);
        assert_eq!(state.phase, Phase::Hold2);
        assert_eq!(state.breath, 1);

        let state = advance(16_000, state, &cfg);
        assert_eq!(state.phase, Phase::Inhale);
        assert_eq!(state.breath, 2);
        assert_eq!(state.breaths_completed(&cfg), 1);
    }

    #[test]
    fn test_phases_cycle_in_order() {
        let cfg = config();
        let mut state = CycleState::initial();
        let mut seen = heapless::Vec::<u8, 32>::new();
        let mut last = None;

        for now in (0..=95_000u64).step_by(500) {
            state = advance(now, state, &cfg);
            if last != Some(state.phase_ordinal()) {
                last = Some(state.phase_ordinal());
                seen.push(state.phase_index()).unwrap();
            }
        }

        assert_eq!(seen.len(), 24);
        for (i, index) in seen.iter().enumerate() {
            assert_eq!(*index as usize, i % 4);
        }
    }

    #[test]
    fn test_finishes_after_exact_session_length() {
        let cfg = config();
        let state = advance(95_999, CycleState::initial(), &cfg);
        assert!(!state.finished);
        assert_eq!(state.breath, 6);
        assert_eq!(state.phase, Phase::Hold2);

        let state = advance(96_000, state, &cfg);
        assert!(state.finished);
        assert_eq!(state.breath, 7);
        assert_eq!(state.remaining_ms(&cfg), 0);
        assert_eq!(state.session_progress(&cfg), 1.0);
    }

    #[test]
    fn test_coarse_and_fine_sampling_agree() {
        let cfg = config();

        let mut coarse = CycleState::initial();
        for now in (0..=100_000u64).step_by(1_000) {
            coarse = advance(now, coarse, &cfg);
        }

        // ~60 fps with jittered frame times
        let mut fine = CycleState::initial();
        let mut now = 0u64;
        let mut frame = 0u64;
        while now <= 100_000 {
            fine = advance(now, fine, &cfg);
            now += 16 + (frame % 3);
            frame += 1;
        }

        assert!(coarse.finished);
        assert_eq!(coarse, fine);
        assert_eq!(coarse, finished_state(&cfg));
    }

    #[test]
    fn test_large_jump_mid_session() {
        let cfg = config();
        let state = advance(2_000, CycleState::initial(), &cfg);
        let state = advance(52_000, state, &cfg);

        // 52_000 ms = 13 whole phases + 0 ms
        assert_eq!(state.phase_ordinal(), 13);
        assert_eq!(state.breath, 4);
        assert_eq!(state.phase, Phase::Hold1);
        assert_eq!(state.phase_elapsed_ms, 0);

        let state = advance(53_500, state, &cfg);
        assert_eq!(state.phase_elapsed_ms, 1_500);
    }

    #[test]
    fn test_large_jump_past_end_finishes() {
        let cfg = config();
        let state = advance(60_000, CycleState::initial(), &cfg);
        assert!(!state.finished);

        let state = advance(60_000 + 50_000, state, &cfg);
        assert!(state.finished);
        assert_eq!(state, finished_state(&cfg));
    }

    #[test]
    fn test_backwards_sample_is_zero_progress() {
        let cfg = config();
        let state = advance(5_000, CycleState::initial(), &cfg);
        let rewound = advance(3_000, state, &cfg);
        assert_eq!(rewound, state);

        let resumed = advance(5_500, rewound, &cfg);
        assert_eq!(resumed.phase_elapsed_ms, 1_500);
    }

    #[test]
    fn test_resample_same_timestamp_is_idempotent() {
        let cfg = config();
        let once = advance(7_777, CycleState::initial(), &cfg);
        let twice = advance(7_777, once, &cfg);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_finished_is_terminal() {
        let cfg = config();
        let done = advance(96_000, CycleState::initial(), &cfg);
        assert_eq!(advance(500_000, done, &cfg), done);
    }

    #[test]
    fn test_single_breath_session() {
        let cfg = SessionConfig {
            total_breaths: 1,
            phase_duration_ms: 1,
            ..config()
        };
        let state = advance(3, CycleState::initial(), &cfg);
        assert_eq!(state.phase, Phase::Hold2);
        assert!(!state.finished);
        assert!(advance(4, state, &cfg).finished);
    }

    proptest! {
        #[test]
        fn prop_sampling_density_does_not_matter(
            mut samples in proptest::collection::vec(0u64..120_000, 0..200),
            end in 0u64..120_000,
        ) {
            let cfg = config();
            samples.retain(|t| *t <= end);
            samples.sort_unstable();

            let mut sampled = CycleState::initial();
            for t in &samples {
                sampled = advance(*t, sampled, &cfg);
            }
            sampled = advance(end, sampled, &cfg);

            let direct = advance(end, CycleState::initial(), &cfg);
            prop_assert_eq!(sampled, direct);
        }

        #[test]
        fn prop_progress_bounded_and_state_consistent(
            steps in proptest::collection::vec(0u64..20_000, 1..100),
            duration in 1u32..10_000,
            breaths in 1u32..10,
        ) {
            let cfg = SessionConfig {
                total_breaths: breaths,
                phase_duration_ms: duration,
                square_size: 300.0,
            };
            let mut state = CycleState::initial();
            let mut now = 0u64;
            let mut last_breath = state.breath;

            for step in steps {
                now += step;
                state = advance(now, state, &cfg);

                let progress = state.progress(&cfg);
                prop_assert!((0.0..=1.0).contains(&progress));
                prop_assert!(state.breath >= last_breath);
                last_breath = state.breath;

                if state.finished {
                    prop_assert_eq!(state.breath, breaths + 1);
                } else {
                    prop_assert!(state.phase_elapsed_ms < duration);
                    prop_assert!(state.breath <= breaths);
                    let expected = now / duration as u64;
                    prop_assert_eq!(state.phase_ordinal(), expected);
                }
            }
        }
    }
}
