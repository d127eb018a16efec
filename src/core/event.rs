//! Input events raised by the physical button layer.
//!
//! Events are a closed four-variant type: the hardware has exactly four
//! buttons, already debounced and disambiguated by the input layer before
//! an event reaches the controller. There is no payload and no catch-all
//! variant, so malformed input is unrepresentable.

use serde::{Deserialize, Serialize};

/// A discrete user input, raised exactly once per physical button edge.
///
/// # Example
///
/// ```rust
/// use vendo::core::Event;
///
/// assert_eq!(Event::Coin1.coin_value(), Some(1));
/// assert_eq!(Event::Coin2.coin_value(), Some(2));
/// assert_eq!(Event::Browse.coin_value(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// A 1-unit coin was inserted.
    Coin1,
    /// A 2-unit coin was inserted.
    Coin2,
    /// Cycle to the next catalog entry.
    Browse,
    /// Confirm the current selection.
    Enter,
}

impl Event {
    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Coin1 => "Coin1",
            Self::Coin2 => "Coin2",
            Self::Browse => "Browse",
            Self::Enter => "Enter",
        }
    }

    /// The credit value this event adds, or `None` for non-coin events.
    pub fn coin_value(&self) -> Option<u32> {
        match self {
            Self::Coin1 => Some(1),
            Self::Coin2 => Some(2),
            Self::Browse | Self::Enter => None,
        }
    }
}
