//! Breathing phases

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of phases in one breath
pub const PHASE_COUNT: u8 = 4;

/// One of the four equal-length segments of a breath
///
/// The order is fixed and cyclic: Inhale, Hold1, Exhale, Hold2, Inhale...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Breathe in (top edge)
    #[default]
    Inhale,
    /// Hold with full lungs (right edge)
    Hold1,
    /// Breathe out (bottom edge)
    Exhale,
    /// Hold with empty lungs (left edge)
    Hold2,
}

impl Phase {
    /// All phases in traversal order
    pub const ALL: [Phase; PHASE_COUNT as usize] =
        [Phase::Inhale, Phase::Hold1, Phase::Exhale, Phase::Hold2];

    /// Position of this phase within a breath (0..=3)
    pub const fn index(self) -> u8 {
        match self {
            Phase::Inhale => 0,
            Phase::Hold1 => 1,
            Phase::Exhale => 2,
            Phase::Hold2 => 3,
        }
    }

    /// Phase at the given index, wrapping modulo 4
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % PHASE_COUNT) as usize]
    }

    /// Next phase in the cycle
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Guidance text shown to the user
    ///
    /// Both holds share the same label.
    pub const fn label(self) -> &'static str {
        match self {
            Phase::Inhale => "Inhale",
            Phase::Hold1 | Phase::Hold2 => "Hold",
            Phase::Exhale => "Exhale",
        }
    }
}
