//! Application Layer
//!
//! Use cases that orchestrate domain types and ports.

pub mod sweep;

pub use sweep::{EntryOutcome, RunSummary, SweepUseCase};
