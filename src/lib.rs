//! Vendo: an event-driven vending machine controller
//!
//! Vendo follows a "pure core, imperative shell" design. The machine's
//! entire behavior (credit accumulation, catalog browsing, the
//! dispense/return decision) is a pure, total transition function over
//! a closed event type. Side effects never happen inside the core:
//! every transition yields plain [`OutputRequest`] values, and whatever
//! presentation layer is wired in (console text, LEDs, a dispense
//! actuator) renders them on the other side of the [`pump::Renderer`]
//! seam. The controller can therefore be tested exhaustively with zero
//! hardware.
//!
//! # Core Concepts
//!
//! - **Event**: one of four debounced button inputs (`Coin1`, `Coin2`,
//!   `Browse`, `Enter`)
//! - **Catalog**: fixed ordered products; index 0 is the reserved
//!   "Return Credit" slot
//! - **Controller**: exclusive owner of the machine state; maps each
//!   event to output requests
//! - **Pump**: FIFO boundary between the raw input context and the
//!   controller
//!
//! # Example
//!
//! ```rust
//! use vendo::catalog::Catalog;
//! use vendo::controller::Controller;
//! use vendo::core::{Event, OutputRequest, Phase};
//!
//! let mut controller = Controller::new(Catalog::standard());
//!
//! // Boot: announce the machine.
//! assert_eq!(controller.start(), vec![OutputRequest::Welcome]);
//!
//! // Insert a 2-unit coin and browse to product 1 (price 1).
//! controller.handle_event(Event::Coin2);
//! controller.handle_event(Event::Browse);
//!
//! // Confirm: credit 2 covers price 1, so the product is dispensed and
//! // the machine settles back into Idle with zero credit.
//! let outputs = controller.handle_event(Event::Enter);
//! assert_eq!(outputs, vec![OutputRequest::DispenseProduct { index: 1 }]);
//! assert_eq!(controller.phase(), Phase::Idle);
//! assert_eq!(controller.state().credit, 0);
//! ```

pub mod catalog;
pub mod controller;
pub mod core;
pub mod pump;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogBuilder, CatalogError};
pub use controller::Controller;
pub use core::{Event, MachineState, OutputRequest, Phase};
pub use pump::{EventPump, EventSender, Renderer};
