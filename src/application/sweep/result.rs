//! Sweep result types

use std::path::{Path, PathBuf};

use crate::domain::entities::ManifestEntry;
use crate::domain::value_objects::{FailurePolicy, Outcome};

/// A manifest entry together with what happened to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub entry: ManifestEntry,
    pub outcome: Outcome,
}

/// Result of one sweep run; outcomes are kept in manifest order
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    root: PathBuf,
    outcomes: Vec<EntryOutcome>,
}

impl RunSummary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, entry: ManifestEntry, outcome: Outcome) {
        self.outcomes.push(EntryOutcome { entry, outcome });
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    pub fn deleted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_deleted()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_skipped()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.is_failed()).count()
    }

    /// Total number of entries considered
    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Failed entries with their reasons, in manifest order
    pub fn failures(&self) -> impl Iterator<Item = (&ManifestEntry, &str)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.outcome.failure_reason().map(|r| (&o.entry, r)))
    }

    /// True when no entry failed. Missing entries do not count.
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }

    /// Process exit status for this run under `policy`
    pub fn exit_code(&self, policy: FailurePolicy) -> i32 {
        match policy {
            FailurePolicy::ExitNonzero if !self.is_success() => 1,
            _ => 0,
        }
    }
}
