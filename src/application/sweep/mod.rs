//! Sweep Use Case
//!
//! Removes every entry of a manifest below a root directory.
//!
//! This module handles:
//! - Probing each entry and classifying what exists there
//! - Removing files, empty directories and directory trees
//! - Recording one outcome per entry without ever aborting the run

mod result;
mod use_case;

pub use result::{EntryOutcome, RunSummary};
pub use use_case::SweepUseCase;
