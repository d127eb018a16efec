//! Machine phases and the controller's full state.
//!
//! `Phase` is a hand-authored closed enum replacing the statechart that a
//! generator tool would otherwise emit. `MachineState` is an explicitly
//! constructed value with a declared initial state; there is no implicit
//! global instance.

use serde::{Deserialize, Serialize};

/// The macro-state of the current transaction.
///
/// `Dispensed` and `Returned` are momentary: the transition function
/// passes through them and settles back in `Idle` within the same step,
/// so a machine at rest is only ever observed in `Idle` or `Selecting`.
///
/// # Example
///
/// ```rust
/// use vendo::core::Phase;
///
/// assert!(!Phase::Idle.is_momentary());
/// assert!(Phase::Dispensed.is_momentary());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// No interaction in progress; credit is zero, the welcome display is active.
    Idle,
    /// A transaction is underway: a coin was inserted or browsing started.
    Selecting,
    /// A product was just dispensed (momentary).
    Dispensed,
    /// Accumulated credit was just returned (momentary).
    Returned,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Selecting => "Selecting",
            Self::Dispensed => "Dispensed",
            Self::Returned => "Returned",
        }
    }

    /// Check if this phase is momentary.
    ///
    /// Momentary phases auto-transition back to `Idle` after emitting
    /// their output; they are never held across events.
    pub fn is_momentary(&self) -> bool {
        matches!(self, Self::Dispensed | Self::Returned)
    }
}

/// The controller's full state: phase, accumulated credit, and the
/// currently browsed catalog index.
///
/// Invariants, upheld by the [`transition`](crate::core::transition)
/// function:
///
/// - `credit` only grows via coin events, and only resets to zero on a
///   completed dispense or return.
/// - `selected` is always a valid catalog index; `Browse` advances it
///   modulo the catalog length.
/// - Exactly one phase holds at any time, and every (phase, event) pair
///   has a defined successor.
///
/// # Example
///
/// ```rust
/// use vendo::core::{MachineState, Phase};
///
/// let state = MachineState::new();
/// assert_eq!(state.phase, Phase::Idle);
/// assert_eq!(state.credit, 0);
/// assert_eq!(state.selected, 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MachineState {
    /// Current transaction phase.
    pub phase: Phase,
    /// Accumulated coin value, in credit units.
    pub credit: u32,
    /// Index of the currently browsed catalog entry.
    pub selected: usize,
}

impl MachineState {
    /// The initial state: `Idle`, zero credit, the return slot selected.
    ///
    /// Also the state the machine settles back into after a completed
    /// transaction (dispense or return).
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            credit: 0,
            selected: 0,
        }
    }
}

impl Default for MachineState {
    fn default() -> Self {
        Self::new()
    }
}
