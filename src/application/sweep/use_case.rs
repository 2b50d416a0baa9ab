//! Sweep Use Case
//!
//! Orchestrates the deletion of every manifest entry.

use std::path::Path;

use crate::domain::entities::{EntryKind, Manifest, ManifestEntry};
use crate::domain::ports::{EntryState, FileSystem, NoopEventSink, SweepEvent, SweepEventSink};
use crate::domain::value_objects::{Outcome, Removal};
use crate::error::SweepResult;

use super::result::RunSummary;

/// Sweep use case - removes manifest entries below a root
///
/// Entries are independent: a failure on one entry is recorded and the next
/// entry is still processed.
pub struct SweepUseCase<FS>
where
    FS: FileSystem,
{
    fs: FS,
}

impl<FS> SweepUseCase<FS>
where
    FS: FileSystem,
{
    /// Create a new sweep use case
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Remove every entry of `manifest` resolved against `root`.
    ///
    /// `root` is not checked for existence; a missing root makes every entry
    /// resolve to `SkippedMissing`.
    pub fn run(
        &self,
        root: &Path,
        manifest: &Manifest,
        sink: &dyn SweepEventSink,
    ) -> RunSummary {
        log::info!(
            "sweeping {} entries under {}",
            manifest.len(),
            root.display()
        );
        sink.on_event(SweepEvent::Started {
            root: root.to_path_buf(),
            entry_count: manifest.len(),
        });

        let mut summary = RunSummary::new(root);
        let mut current_group: Option<&str> = None;

        for (index, entry) in manifest.entries().iter().enumerate() {
            let group = entry.group.as_deref();
            if let Some(label) = group {
                if current_group != Some(label) {
                    sink.on_event(SweepEvent::GroupStarted {
                        label: label.to_string(),
                    });
                }
            }
            current_group = group;

            let outcome = self.process_entry(root, entry);
            sink.on_event(SweepEvent::EntryFinished {
                index,
                entry: entry.clone(),
                outcome: outcome.clone(),
            });
            summary.record(entry.clone(), outcome);
        }

        sink.on_event(SweepEvent::Completed {
            deleted: summary.deleted_count(),
            skipped: summary.skipped_count(),
            failed: summary.failed_count(),
        });

        summary
    }

    /// Remove the given file and directory lists silently.
    ///
    /// Files are processed before directories. Fails only if a path is not a
    /// valid relative manifest path, before anything is deleted.
    pub fn run_lists<F, D>(&self, root: &Path, files: F, directories: D) -> SweepResult<RunSummary>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let manifest = Manifest::from_lists(files, directories)?;
        Ok(self.run(root, &manifest, &NoopEventSink))
    }

    fn process_entry(&self, root: &Path, entry: &ManifestEntry) -> Outcome {
        let path = entry.resolve(root);
        let outcome = match entry.kind {
            EntryKind::File => self.delete_file(&path),
            EntryKind::Directory => self.delete_directory(&path),
        };

        match &outcome {
            Outcome::Failed(reason) => {
                log::warn!("failed to delete {}: {}", path.display(), reason)
            }
            other => log::debug!("{}: {}", path.display(), other.status()),
        }

        outcome
    }

    fn delete_file(&self, path: &Path) -> Outcome {
        match self.fs.probe(path) {
            Ok(EntryState::File) => {}
            Ok(_) => return Outcome::SkippedMissing,
            Err(e) if e.is_not_found() => return Outcome::SkippedMissing,
            Err(e) => return Outcome::Failed(e.to_string()),
        }

        match self.fs.remove_file(path) {
            Ok(()) => Outcome::Deleted(Removal::File),
            // Vanished between probe and removal
            Err(e) if e.is_not_found() => Outcome::SkippedMissing,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }

    fn delete_directory(&self, path: &Path) -> Outcome {
        let (removal, result) = match self.fs.probe(path) {
            Ok(EntryState::Directory { empty: true }) => {
                (Removal::EmptyDirectory, self.fs.remove_empty_dir(path))
            }
            Ok(EntryState::Directory { empty: false }) => {
                (Removal::Recursive, self.fs.remove_dir_all(path))
            }
            Ok(EntryState::DirectoryLink) => (Removal::Link, self.fs.remove_link(path)),
            Ok(_) => return Outcome::SkippedMissing,
            Err(e) if e.is_not_found() => return Outcome::SkippedMissing,
            Err(e) => return Outcome::Failed(e.to_string()),
        };

        match result {
            Ok(()) => Outcome::Deleted(removal),
            Err(e) if e.is_not_found() => Outcome::SkippedMissing,
            Err(e) => Outcome::Failed(e.to_string()),
        }
    }
}
