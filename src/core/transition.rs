//! The pure transition function.
//!
//! All control logic lives here as a total function of (state, event):
//! no side effects, no hardware, no clock. The controller applies the
//! resulting [`Step`] and a renderer executes the output requests, so
//! this function can be tested exhaustively with plain values.

use crate::catalog::Catalog;
use crate::core::event::Event;
use crate::core::output::OutputRequest;
use crate::core::state::{MachineState, Phase};

/// The outcome of feeding one event into the machine.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Step {
    /// The state the machine settles in after this event.
    pub next: MachineState,
    /// Output requests to hand to the presentation layer, in order.
    pub outputs: Vec<OutputRequest>,
    /// The momentary phase passed through, if this event completed a
    /// transaction (`Dispensed` or `Returned`).
    pub via: Option<Phase>,
}

impl Step {
    fn settle(next: MachineState, outputs: Vec<OutputRequest>) -> Self {
        Self {
            next,
            outputs,
            via: None,
        }
    }

    fn complete(via: Phase, outputs: Vec<OutputRequest>) -> Self {
        Self {
            next: MachineState::new(),
            outputs,
            via: Some(via),
        }
    }
}

/// Apply `event` to `state`, consulting `catalog` for prices.
///
/// Total over every (phase, event) pair per the transition table:
///
/// - Coins accumulate credit and move the machine into `Selecting`.
/// - `Browse` enters `Selecting`; once there it advances the selection
///   modulo the catalog length.
/// - `Enter` in `Idle` is a no-op with no output (nothing to confirm).
/// - `Enter` in `Selecting` bifurcates on the selection: the index-0
///   return slot always pays out the credit; a real product dispenses
///   iff credit covers its price, and otherwise re-displays the current
///   selection with the machine left untouched so the user can add
///   coins; insufficient credit is a modeled condition, not an error.
///
/// Completed transactions pass through the momentary `Dispensed` or
/// `Returned` phase and settle back in the initial state within the
/// same call.
///
/// # Example
///
/// ```rust
/// use vendo::catalog::Catalog;
/// use vendo::core::{transition, Event, MachineState, OutputRequest, Phase};
///
/// let catalog = Catalog::standard();
/// let step = transition(MachineState::new(), Event::Coin1, &catalog);
///
/// assert_eq!(step.next.phase, Phase::Selecting);
/// assert_eq!(step.next.credit, 1);
/// assert_eq!(
///     step.outputs,
///     vec![OutputRequest::ShowSelection { index: 0, credit: 1 }]
/// );
/// ```
pub fn transition(state: MachineState, event: Event, catalog: &Catalog) -> Step {
    match (state.phase, event) {
        (Phase::Idle | Phase::Selecting, Event::Coin1 | Event::Coin2) => {
            let coin = event.coin_value().unwrap_or(0);
            let next = MachineState {
                phase: Phase::Selecting,
                credit: state.credit + coin,
                selected: state.selected,
            };
            Step::settle(next, vec![show(next)])
        }

        (Phase::Idle, Event::Browse) => {
            // Entering Selecting leaves the selection where it was; only
            // further Browse presses cycle it.
            let next = MachineState {
                phase: Phase::Selecting,
                ..state
            };
            Step::settle(next, vec![show(next)])
        }

        (Phase::Selecting, Event::Browse) => {
            let next = MachineState {
                selected: catalog.next(state.selected),
                ..state
            };
            Step::settle(next, vec![show(next)])
        }

        // Nothing to confirm before any coin or browse.
        (Phase::Idle, Event::Enter) => Step::settle(state, Vec::new()),

        (Phase::Selecting, Event::Enter) => confirm(state, catalog),

        // Momentary phases are never held across events; if one is ever
        // observed here the machine behaves as freshly settled.
        (Phase::Dispensed | Phase::Returned, _) => {
            Step::settle(MachineState::new(), Vec::new())
        }
    }
}

fn confirm(state: MachineState, catalog: &Catalog) -> Step {
    if state.selected == 0 {
        return Step::complete(
            Phase::Returned,
            vec![OutputRequest::ReturnCredit {
                amount: state.credit,
            }],
        );
    }

    if catalog.covers(state.selected, state.credit) {
        Step::complete(
            Phase::Dispensed,
            vec![OutputRequest::DispenseProduct {
                index: state.selected,
            }],
        )
    } else {
        // Insufficient credit: re-display and wait for more coins.
        Step::settle(state, vec![show(state)])
    }
}

fn show(state: MachineState) -> OutputRequest {
    OutputRequest::ShowSelection {
        index: state.selected,
        credit: state.credit,
    }
}
