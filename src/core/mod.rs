//! Core vending machine types and logic.
//!
//! This module contains the pure functional core of the controller:
//! - Input events ([`Event`])
//! - Machine phases and state ([`Phase`], [`MachineState`])
//! - Output requests ([`OutputRequest`])
//! - The total transition function ([`transition`])
//! - Immutable transition logging ([`TransactionLog`])
//!
//! All logic in this module is pure (no side effects), following the
//! "pure core, imperative shell" philosophy: the shell lives in
//! [`crate::controller`] and [`crate::pump`].

mod event;
mod history;
mod output;
mod state;
mod transition;

pub use event::Event;
pub use history::{TransactionLog, TransitionRecord};
pub use output::OutputRequest;
pub use state::{MachineState, Phase};
pub use transition::{transition, Step};
