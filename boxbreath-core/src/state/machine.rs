//! Session state machine definition
//!
//! Whether the clock is sampled, whether the marker is drawn and which
//! screen is shown are all a function of the current state.

use super::events::Event;

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// No session; landing screen
    #[default]
    Idle,
    /// Introductory countdown running
    Counting,
    /// Breathing cycles running
    Running,
    /// All breaths completed; completion screen
    Finished,
}

impl State {
    /// Check if this state consumes clock samples
    pub fn samples_clock(&self) -> bool {
        matches!(self, State::Counting | State::Running)
    }

    /// Check if a marker position is being produced
    pub fn is_breathing(&self) -> bool {
        matches!(self, State::Running)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, Start) => Counting,

            (Counting, CountdownElapsed) => Running,
            (Counting, Exit) => Idle,

            (Running, BreathsComplete) => Finished,
            (Running, Restart) => Counting,
            (Running, Reset) => Idle,
            (Running, Exit) => Idle,

            (Finished, Restart) => Counting,
            (Finished, Reset) => Idle,
            (Finished, Exit) => Idle,

            // Default: stay in current state
            _ => self,
        }
    }

    /// Check whether an event is accepted in this state
    pub fn accepts(self, event: Event) -> bool {
        self.transition(event) != self || matches!((self, event), (State::Idle, Event::Exit))
    }
}
