//! Failure Policy Value Object
//!
//! Decides how failed entries affect the process exit status.

use serde::{Deserialize, Serialize};

/// What the process reports when at least one entry failed to delete.
///
/// Missing entries never count as failures.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Exit with status 1 if any entry failed (default)
    #[default]
    ExitNonzero,
    /// Always exit with status 0
    ExitZero,
}

impl FailurePolicy {
    /// Parse from config or environment strings; accepts `-` and `_` spellings.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "exit_nonzero" | "nonzero" | "strict" => Some(Self::ExitNonzero),
            "exit_zero" | "zero" | "lenient" => Some(Self::ExitZero),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::ExitNonzero => "exit_nonzero",
            FailurePolicy::ExitZero => "exit_zero",
        }
    }
}

impl std::fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
