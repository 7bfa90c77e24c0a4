//! Events that trigger session state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // User events
    /// User pressed start on the landing screen
    Start,
    /// User asked for a fresh run (goes straight back to the countdown)
    Restart,
    /// User abandoned the run and returns to the landing screen
    Reset,
    /// User left the exercise
    Exit,

    // Timing events
    /// Introductory countdown finished
    CountdownElapsed,
    /// Last phase of the last breath completed
    BreathsComplete,
}
