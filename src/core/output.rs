//! Output requests emitted by the controller.
//!
//! The controller never calls presentation or actuator code directly. It
//! describes what should happen as plain values; a renderer on the other
//! side of the seam decides how to show or perform each request (console
//! text, LED patterns, a dispense solenoid). Requests are fire-and-forget:
//! the controller never learns whether rendering succeeded.

use serde::{Deserialize, Serialize};

/// A required external effect, decoupled from its rendering.
///
/// # Example
///
/// ```rust
/// use vendo::core::OutputRequest;
///
/// let request = OutputRequest::ShowSelection { index: 1, credit: 2 };
/// assert_eq!(request.name(), "ShowSelection");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OutputRequest {
    /// Display the welcome message; emitted once at startup.
    Welcome,
    /// Display the currently browsed product and accumulated credit.
    ShowSelection { index: usize, credit: u32 },
    /// Signal the physical dispense mechanism for product `index`.
    DispenseProduct { index: usize },
    /// Signal the credit-return mechanism to pay out `amount` units.
    ReturnCredit { amount: u32 },
}

impl OutputRequest {
    /// Get the request's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::ShowSelection { .. } => "ShowSelection",
            Self::DispenseProduct { .. } => "DispenseProduct",
            Self::ReturnCredit { .. } => "ReturnCredit",
        }
    }
}
