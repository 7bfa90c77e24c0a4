//! Session controller
//!
//! Owns the session lifecycle and the single active `CycleState`:
//! - Subscribes to the clock on start and releases it on finish, restart,
//!   reset and exit
//! - Runs the countdown, then feeds every clock sample into the engine
//! - Maps the result to a marker position and notifies the observer
//! - Raises the completion notification once per run

use core::fmt;

use super::countdown::{Countdown, CountdownStatus};
use crate::config::{ConfigError, CountdownConfig, SessionConfig};
use crate::cycle::{advance, CycleState, Phase};
use crate::geometry::{position_for_state, Position};
use crate::state::{Event, State};
use crate::traits::{ClockSample, ClockSource, SessionObserver, SubscriptionId};

/// Lifecycle errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionError {
    /// Session parameters rejected at start
    Config(ConfigError),
    /// The call is not valid in the current state
    InvalidTransition { state: State, event: Event },
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        SessionError::Config(e)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Config(e) => write!(f, "invalid session configuration: {}", e),
            SessionError::InvalidTransition { state, event } => {
                write!(f, "{:?} is not allowed while {:?}", event, state)
            }
        }
    }
}

/// Read-only view of one processed clock sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickSnapshot {
    /// Cycle state after the sample
    pub cycle: CycleState,
    /// Marker position on the square
    pub position: Position,
    /// Progress within the current phase (0..=1)
    pub progress: f32,
    /// Configured number of breaths
    pub total_breaths: u32,
}

impl TickSnapshot {
    /// Snapshot of `cycle` under `config`
    pub fn from_cycle(cycle: CycleState, config: &SessionConfig) -> Self {
        Self {
            cycle,
            position: position_for_state(&cycle, config),
            progress: cycle.progress(config),
            total_breaths: config.total_breaths,
        }
    }

    /// Phase the snapshot is in
    pub fn phase(&self) -> Phase {
        self.cycle.phase
    }

    /// Breath number for display, never beyond the configured total
    pub fn display_breath(&self) -> u32 {
        self.cycle.breath.min(self.total_breaths)
    }
}

/// Session controller
///
/// Single owner of the cycle state and of the clock subscription.
pub struct SessionController<C, O> {
    /// Current lifecycle state
    state: State,
    /// Session parameters (immutable while a session exists)
    config: SessionConfig,
    /// Countdown tracker
    countdown: Countdown,
    /// Current cycle state
    cycle: CycleState,
    /// Time source
    clock: C,
    /// Notification sink
    observer: O,
    /// Active clock subscription, if any
    subscription: Option<SubscriptionId>,
    /// Clock time at which the current run's countdown began (ms)
    base_ms: u64,
    /// Completion already reported for the current run
    completion_sent: bool,
}

impl<C: ClockSource, O: SessionObserver> SessionController<C, O> {
    /// Create an idle controller
    ///
    /// The configuration is validated when a session starts.
    pub fn new(config: SessionConfig, countdown: CountdownConfig, clock: C, observer: O) -> Self {
        Self {
            state: State::Idle,
            config,
            countdown: Countdown::new(countdown),
            cycle: CycleState::initial(),
            clock,
            observer,
            subscription: None,
            base_ms: 0,
            completion_sent: false,
        }
    }

    /// Get current state
    pub fn state(&self) -> State {
        self.state
    }

    /// Get the current cycle state
    pub fn cycle(&self) -> &CycleState {
        &self.cycle
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn countdown_config(&self) -> &CountdownConfig {
        self.countdown.config()
    }

    /// Countdown status last reported (while counting)
    pub fn countdown_status(&self) -> Option<CountdownStatus> {
        if self.state == State::Counting {
            self.countdown.status()
        } else {
            None
        }
    }

    /// Active clock subscription
    pub fn subscription(&self) -> Option<SubscriptionId> {
        self.subscription
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Current snapshot (only while breathing)
    pub fn snapshot(&self) -> Option<TickSnapshot> {
        if self.state.is_breathing() {
            Some(self.snapshot_of(self.cycle))
        } else {
            None
        }
    }

    /// Current marker position (only while breathing)
    pub fn position(&self) -> Option<Position> {
        self.snapshot().map(|s| s.position)
    }

    /// Start a session from Idle
    ///
    /// Validates the configuration, subscribes to the clock and begins the
    /// countdown. On error the controller stays Idle.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.ensure_accepts(Event::Start)?;
        self.config.validate()?;
        self.countdown.config().validate()?;

        self.begin_run();
        self.transition(Event::Start);
        self.announce_countdown();
        Ok(())
    }

    /// Abandon the current run and go straight back to the countdown
    ///
    /// Valid from Running or Finished. The previous subscription is released
    /// before a new one is taken.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.ensure_accepts(Event::Restart)?;

        self.release_clock();
        self.begin_run();
        self.transition(Event::Restart);
        self.announce_countdown();
        Ok(())
    }

    /// Abandon the current run and return to Idle
    ///
    /// Valid from Running or Finished.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.ensure_accepts(Event::Reset)?;

        self.release_clock();
        self.clear_run();
        self.transition(Event::Reset);
        Ok(())
    }

    /// Leave the exercise from any state
    pub fn exit(&mut self) {
        self.release_clock();
        self.clear_run();
        self.transition(Event::Exit);
    }

    /// Process one clock sample
    ///
    /// Samples from a released subscription, or arriving while the session
    /// is not sampling the clock, are ignored. Returns the timing event if
    /// the sample caused a state transition.
    pub fn on_sample(&mut self, sample: ClockSample) -> Option<Event> {
        if self.subscription != Some(sample.subscription) || !self.state.samples_clock() {
            return None;
        }

        let since_start = sample.now_ms.saturating_sub(self.base_ms);
        match self.state {
            State::Counting => self.tick_countdown(since_start),
            State::Running => {
                let running = since_start.saturating_sub(self.countdown.config().total_ms());
                self.tick_running(running)
            }
            _ => None,
        }
    }

    /// Countdown step
    fn tick_countdown(&mut self, since_start: u64) -> Option<Event> {
        let status = self.countdown.update(since_start);
        match status {
            Some(CountdownStatus::Done) => {}
            Some(status) => {
                self.observer.on_countdown(status.digit());
                return None;
            }
            None => return None,
        }

        self.transition(Event::CountdownElapsed);
        self.cycle = CycleState::initial();
        self.observer.on_phase_change(self.cycle.phase, self.cycle.breath);

        // Time past the end of the countdown belongs to the first breath
        let running = since_start.saturating_sub(self.countdown.config().total_ms());
        self.tick_running(running).or(Some(Event::CountdownElapsed))
    }

    /// Breathing step
    fn tick_running(&mut self, running_ms: u64) -> Option<Event> {
        let previous = self.cycle;
        self.cycle = advance(running_ms, previous, &self.config);

        let snapshot = self.snapshot_of(self.cycle);
        self.observer.on_tick(&snapshot);

        if self.cycle.finished {
            self.finish();
            return Some(Event::BreathsComplete);
        }

        if self.cycle.phase != previous.phase {
            self.observer.on_phase_change(self.cycle.phase, self.cycle.breath);
        }

        None
    }

    /// Running → Finished
    fn finish(&mut self) {
        self.release_clock();
        self.transition(Event::BreathsComplete);

        if !self.completion_sent {
            self.completion_sent = true;
            self.observer.on_session_complete();
        }
    }

    /// Take a fresh subscription and reset run state
    fn begin_run(&mut self) {
        self.clear_run();
        let id = self.clock.subscribe();
        self.subscription = Some(id);
        self.base_ms = self.clock.now_ms();
    }

    /// Reset run state to its initial value
    fn clear_run(&mut self) {
        self.cycle = CycleState::initial();
        self.countdown.reset();
        self.completion_sent = false;
        self.base_ms = 0;
    }

    /// Release the active subscription, if any
    fn release_clock(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.clock.unsubscribe(id);
        }
    }

    /// Report the first countdown digit right away
    fn announce_countdown(&mut self) {
        if let Some(status) = self.countdown.update(0) {
            self.observer.on_countdown(status.digit());
        }
    }

    fn ensure_accepts(&self, event: Event) -> Result<(), SessionError> {
        if self.state.accepts(event) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                state: self.state,
                event,
            })
        }
    }

    fn snapshot_of(&self, cycle: CycleState) -> TickSnapshot {
        TickSnapshot::from_cycle(cycle, &self.config)
    }

    /// Perform state transition
    fn transition(&mut self, event: Event) {
        let from = self.state;
        self.state = self.state.transition(event);
        if from != self.state {
            self.observer.on_state_change(from, self.state);
        }
    }
}
