//! Catalog error types.

use thiserror::Error;

/// Errors that can occur when querying a catalog.
///
/// An out-of-range index is a programming invariant violation, not a
/// user-facing condition: the controller keeps `selected` inside the
/// catalog at all times, so seeing this error means a caller fabricated
/// an index. It is surfaced rather than clamped so a corrupted selection
/// cannot be masked.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("product index {index} out of range for catalog of {len} entries")]
    OutOfRange { index: usize, len: usize },
}
