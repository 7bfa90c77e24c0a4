//! Session observer trait
//!
//! The presentation layer implements this to receive snapshots and
//! notifications. All methods have empty defaults so an observer only
//! overrides what it renders.

use crate::cycle::Phase;
use crate::session::TickSnapshot;
use crate::state::State;

/// Receiver of session notifications
pub trait SessionObserver {
    /// Countdown digit changed (0 while settling before the first inhale)
    fn on_countdown(&mut self, _remaining: u8) {}

    /// One processed clock sample while breathing
    fn on_tick(&mut self, _snapshot: &TickSnapshot) {}

    /// The phase index changed; `breath` is the breath the new phase belongs to
    fn on_phase_change(&mut self, _phase: Phase, _breath: u32) {}

    /// The last breath completed; fired once per run
    fn on_session_complete(&mut self) {}

    /// Lifecycle state changed
    fn on_state_change(&mut self, _from: State, _to: State) {}
}

/// Observer that ignores everything
impl SessionObserver for () {}
