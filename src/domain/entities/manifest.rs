//! Manifest entity
//!
//! A manifest is the ordered list of relative paths that a sweep removes.
//! Entries are validated on construction so that nothing outside the sweep
//! root can ever be targeted.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{SweepError, SweepResult};

/// Kind of filesystem entry a manifest item refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "directory",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One manifest item: a path relative to the sweep root plus its kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    pub kind: EntryKind,
    /// Heading shown before the first entry of a run of entries with this label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl ManifestEntry {
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            group: None,
        }
    }

    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Resolve this entry against the sweep root
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(&self.path)
    }

    /// Path as shown to users; directories get a trailing slash
    pub fn display_path(&self) -> String {
        if self.is_directory() && !self.path.ends_with('/') {
            format!("{}/", self.path)
        } else {
            self.path.clone()
        }
    }

    fn validate(&self) -> SweepResult<()> {
        let path = Path::new(&self.path);

        if self.path.trim().is_empty() {
            return Err(SweepError::InvalidManifestEntry {
                path: self.path.clone(),
                reason: "path is empty".to_string(),
            });
        }

        if path.is_absolute() {
            return Err(SweepError::InvalidManifestEntry {
                path: self.path.clone(),
                reason: "path must be relative".to_string(),
            });
        }

        for component in path.components() {
            match component {
                Component::ParentDir => {
                    return Err(SweepError::PathEscape {
                        path: path.to_path_buf(),
                    });
                }
                // `\foo` on Windows is not absolute but still rooted
                Component::RootDir | Component::Prefix(_) => {
                    return Err(SweepError::InvalidManifestEntry {
                        path: self.path.clone(),
                        reason: "path must be relative".to_string(),
                    });
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        // "." or "./" would resolve to the root itself
        if path.components().all(|c| matches!(c, Component::CurDir)) {
            return Err(SweepError::InvalidManifestEntry {
                path: self.path.clone(),
                reason: "path refers to the sweep root".to_string(),
            });
        }

        Ok(())
    }
}

/// Ordered, validated list of entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest, rejecting any entry that could escape the root
    pub fn new(entries: Vec<ManifestEntry>) -> SweepResult<Self> {
        for entry in &entries {
            entry.validate()?;
        }
        Ok(Self { entries })
    }

    /// Build a manifest from separate file and directory lists.
    ///
    /// Files are processed first, then directories, each in the given order.
    pub fn from_lists<F, D>(files: F, directories: D) -> SweepResult<Self>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let entries = files
            .into_iter()
            .map(ManifestEntry::file)
            .chain(directories.into_iter().map(ManifestEntry::directory))
            .collect();
        Self::new(entries)
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn files(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    pub fn directories(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Directory)
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
