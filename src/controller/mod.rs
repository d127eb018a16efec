//! The controller: exclusive owner of the machine state.
//!
//! The controller is the only component that mutates [`MachineState`].
//! It feeds each incoming event through the pure
//! [`transition`](crate::core::transition) function, records the phase
//! movement in its [`TransactionLog`], and hands the resulting output
//! requests back to the caller. It never calls presentation or actuator
//! code itself.

use crate::catalog::Catalog;
use crate::core::{
    transition, Event, MachineState, OutputRequest, Phase, TransactionLog, TransitionRecord,
};
use chrono::Utc;

/// Event-driven vending machine controller.
///
/// Created once at system start and driven for the process lifetime;
/// events are delivered one at a time and each runs to completion before
/// the next is accepted (the FIFO boundary lives in [`crate::pump`]).
///
/// # Example
///
/// ```rust
/// use vendo::catalog::Catalog;
/// use vendo::controller::Controller;
/// use vendo::core::{Event, OutputRequest, Phase};
///
/// let mut controller = Controller::new(Catalog::standard());
/// assert_eq!(controller.start(), vec![OutputRequest::Welcome]);
///
/// controller.handle_event(Event::Coin1);
/// controller.handle_event(Event::Browse);
/// let outputs = controller.handle_event(Event::Enter); // price(1) == 1
///
/// assert_eq!(outputs, vec![OutputRequest::DispenseProduct { index: 1 }]);
/// assert_eq!(controller.state().phase, Phase::Idle);
/// assert_eq!(controller.state().credit, 0);
/// ```
pub struct Controller {
    state: MachineState,
    catalog: Catalog,
    log: TransactionLog,
}

impl Controller {
    /// Create a controller in the initial state over the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: MachineState::new(),
            catalog,
            log: TransactionLog::new(),
        }
    }

    /// Announce the machine at startup.
    ///
    /// Emits the one-time [`OutputRequest::Welcome`]; the external layer
    /// calls this exactly once, before any event is raised.
    pub fn start(&self) -> Vec<OutputRequest> {
        vec![OutputRequest::Welcome]
    }

    /// Handle one input event, returning the output requests to render.
    ///
    /// Runs the pure transition function, applies the resulting state,
    /// and records the phase movement. A completed transaction records
    /// its momentary phase and the settle back to `Idle` as two entries.
    pub fn handle_event(&mut self, event: Event) -> Vec<OutputRequest> {
        let step = transition(self.state, event, &self.catalog);
        let now = Utc::now();

        match step.via {
            Some(momentary) => {
                self.log = self
                    .log
                    .record(TransitionRecord {
                        from: self.state.phase,
                        to: momentary,
                        event,
                        timestamp: now,
                    })
                    .record(TransitionRecord {
                        from: momentary,
                        to: step.next.phase,
                        event,
                        timestamp: now,
                    });
            }
            None => {
                self.log = self.log.record(TransitionRecord {
                    from: self.state.phase,
                    to: step.next.phase,
                    event,
                    timestamp: now,
                });
            }
        }

        self.state = step.next;
        step.outputs
    }

    /// Current machine state (pure).
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Current phase (pure).
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// The catalog this controller sells from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The transition log accumulated so far.
    pub fn log(&self) -> &TransactionLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(Catalog::standard())
    }

    #[test]
    fn start_emits_welcome() {
        let c = controller();
        assert_eq!(c.start(), vec![OutputRequest::Welcome]);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn single_coin_purchase_flow() {
        let mut c = controller();

        let outputs = c.handle_event(Event::Coin1);
        assert_eq!(
            outputs,
            vec![OutputRequest::ShowSelection { index: 0, credit: 1 }]
        );
        assert_eq!(c.phase(), Phase::Selecting);
        assert_eq!(c.state().credit, 1);

        let outputs = c.handle_event(Event::Browse);
        assert_eq!(
            outputs,
            vec![OutputRequest::ShowSelection { index: 1, credit: 1 }]
        );

        let outputs = c.handle_event(Event::Enter);
        assert_eq!(outputs, vec![OutputRequest::DispenseProduct { index: 1 }]);
        assert_eq!(c.state(), &MachineState::new());
    }

    #[test]
    fn insufficient_credit_keeps_transaction_alive() {
        let mut c = controller();

        c.handle_event(Event::Coin2);
        c.handle_event(Event::Browse);
        c.handle_event(Event::Browse);
        c.handle_event(Event::Browse); // selected = 3, price 3, credit 2

        let outputs = c.handle_event(Event::Enter);
        assert_eq!(
            outputs,
            vec![OutputRequest::ShowSelection { index: 3, credit: 2 }]
        );
        assert_eq!(c.phase(), Phase::Selecting);
        assert_eq!(c.state().credit, 2);
        assert_eq!(c.state().selected, 3);

        // One more coin covers it.
        c.handle_event(Event::Coin1);
        let outputs = c.handle_event(Event::Enter);
        assert_eq!(outputs, vec![OutputRequest::DispenseProduct { index: 3 }]);
        assert_eq!(c.state(), &MachineState::new());
    }

    #[test]
    fn browse_wrap_back_to_return_slot_pays_out() {
        let mut c = controller();

        c.handle_event(Event::Coin2);
        c.handle_event(Event::Coin2);
        c.handle_event(Event::Coin1); // credit 5
        c.handle_event(Event::Browse);
        c.handle_event(Event::Browse); // selected 2
        c.handle_event(Event::Browse); // selected 3
        c.handle_event(Event::Browse); // wraps to 0

        let outputs = c.handle_event(Event::Enter);
        assert_eq!(outputs, vec![OutputRequest::ReturnCredit { amount: 5 }]);
        assert_eq!(c.state(), &MachineState::new());
    }

    #[test]
    fn enter_on_idle_leaves_no_trace_in_outputs() {
        let mut c = controller();
        assert!(c.handle_event(Event::Enter).is_empty());
        assert_eq!(c.state(), &MachineState::new());
    }

    #[test]
    fn log_records_momentary_phases() {
        let mut c = controller();
        c.handle_event(Event::Coin1);
        c.handle_event(Event::Browse);
        c.handle_event(Event::Enter);

        assert_eq!(
            c.log().path(),
            vec![
                Phase::Idle,
                Phase::Selecting,
                Phase::Selecting,
                Phase::Dispensed,
                Phase::Idle,
            ]
        );
    }

    #[test]
    fn log_records_one_entry_per_plain_event() {
        let mut c = controller();
        c.handle_event(Event::Coin1);
        c.handle_event(Event::Coin2);

        let records = c.log().records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].event, Event::Coin1);
        assert_eq!(records[1].event, Event::Coin2);
        assert_eq!(records[1].from, Phase::Selecting);
        assert_eq!(records[1].to, Phase::Selecting);
    }

    #[test]
    fn return_with_zero_credit_from_browse_only() {
        let mut c = controller();
        c.handle_event(Event::Browse); // Selecting, credit 0, selected 0

        let outputs = c.handle_event(Event::Enter);
        assert_eq!(outputs, vec![OutputRequest::ReturnCredit { amount: 0 }]);
        assert_eq!(c.state(), &MachineState::new());
    }
}
