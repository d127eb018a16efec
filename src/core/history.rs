//! Phase transition logging.
//!
//! Provides immutable tracking of phase transitions over time. The log is
//! in-memory observability only: it lives and dies with the process and
//! is not a persistence mechanism (credit never survives a power cycle).

use crate::core::event::Event;
use crate::core::state::Phase;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase transition.
///
/// Records are immutable values. Self-loops (e.g. a coin inserted while
/// already `Selecting`) are recorded too, so the log reflects every
/// handled event; completed transactions show up as a pass through the
/// momentary `Dispensed` or `Returned` phase followed by the settle
/// back to `Idle`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The phase being transitioned from.
    pub from: Phase,
    /// The phase being transitioned to.
    pub to: Phase,
    /// The event that caused the transition.
    pub event: Event,
    /// When the transition occurred.
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of phase transitions.
///
/// The log is immutable: `record` returns a new log with the record
/// added, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use vendo::core::{Event, Phase, TransactionLog, TransitionRecord};
/// use chrono::Utc;
///
/// let log = TransactionLog::new();
/// let log = log.record(TransitionRecord {
///     from: Phase::Idle,
///     to: Phase::Selecting,
///     event: Event::Coin1,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.path(), vec![Phase::Idle, Phase::Selecting]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransactionLog {
    records: Vec<TransitionRecord>,
}

impl TransactionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// The path of phases traversed: the first record's origin followed
    /// by the target of every record. Empty for an empty log.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Total duration from first to last record, or `None` when the log
    /// holds fewer than one record.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// All records in arrival order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }
}
