//! Sweep Event Port
//!
//! Provides an observable interface for sweep runs.
//! Enables per-entry progress lines and NDJSON event streams.

use std::path::PathBuf;

use crate::domain::entities::ManifestEntry;
use crate::domain::value_objects::Outcome;

/// Event emitted during a sweep run
#[derive(Debug, Clone)]
pub enum SweepEvent {
    /// Run started
    Started { root: PathBuf, entry_count: usize },

    /// First entry of a new group is about to be processed
    GroupStarted { label: String },

    /// One entry was processed
    EntryFinished {
        index: usize,
        entry: ManifestEntry,
        outcome: Outcome,
    },

    /// Every entry was processed
    Completed {
        deleted: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving sweep events
///
/// Implementations:
/// - console sink: one status line per entry
/// - JSON sink: NDJSON event stream
/// - `NoopEventSink`: silent operation
pub trait SweepEventSink {
    fn on_event(&self, event: SweepEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl SweepEventSink for NoopEventSink {
    fn on_event(&self, _event: SweepEvent) {}
}
