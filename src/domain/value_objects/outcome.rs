//! Outcome Value Object
//!
//! The classification of what happened to one manifest entry.

use std::fmt;

/// How an entry was removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// A single file was unlinked
    File,
    /// An empty directory was removed directly
    EmptyDirectory,
    /// A directory was removed together with all of its contents
    Recursive,
    /// A symbolic link to a directory was removed; its target was kept
    Link,
}

impl Removal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Removal::File => "file",
            Removal::EmptyDirectory => "empty_directory",
            Removal::Recursive => "recursive",
            Removal::Link => "link",
        }
    }
}

/// Result for a single manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deleted(Removal),
    /// Entry absent, or present with a different kind than the manifest says
    SkippedMissing,
    /// Removal was attempted and the OS refused; holds the reason
    Failed(String),
}

impl Outcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Outcome::Deleted(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::SkippedMissing)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Stable machine-readable status name
    pub fn status(&self) -> &'static str {
        match self {
            Outcome::Deleted(_) => "deleted",
            Outcome::SkippedMissing => "skipped_missing",
            Outcome::Failed(_) => "failed",
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Outcome::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Deleted(Removal::Recursive) => write!(f, "deleted (with contents)"),
            Outcome::Deleted(Removal::Link) => write!(f, "unlinked"),
            Outcome::Deleted(_) => write!(f, "deleted"),
            Outcome::SkippedMissing => write!(f, "not found"),
            Outcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}
