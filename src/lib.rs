//! Sweep - manifest-driven cleanup of a project checkout
//!
//! Sweep removes a fixed list of files and directories below a root,
//! records one outcome per entry, and reports an aggregate summary.
//! Failures on one entry never stop the others from being processed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{EntryOutcome, RunSummary, SweepUseCase};
pub use config::{builtin_manifest, Config};
pub use domain::entities::{EntryKind, Manifest, ManifestEntry};
pub use domain::value_objects::{FailurePolicy, Outcome, Removal};
pub use error::{SweepError, SweepResult};
pub use infrastructure::LocalFs;
