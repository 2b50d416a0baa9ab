//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::ports::file_system::{EntryState, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Kind checks follow symbolic links; removals never do.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn probe(&self, path: &Path) -> FsResult<EntryState> {
        let link_meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if is_absent(&e) => return Ok(EntryState::Missing),
            Err(e) => return Err(FsError::from_io(path, e)),
        };

        let is_link = link_meta.file_type().is_symlink();
        let meta = if is_link {
            match fs::metadata(path) {
                Ok(meta) => meta,
                // Dangling or looping link
                Err(e) if is_absent(&e) => return Ok(EntryState::Missing),
                Err(e) => return Err(FsError::from_io(path, e)),
            }
        } else {
            link_meta
        };

        if meta.is_file() {
            return Ok(EntryState::File);
        }

        if meta.is_dir() {
            if is_link {
                return Ok(EntryState::DirectoryLink);
            }
            let mut entries = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;
            return Ok(EntryState::Directory {
                empty: entries.next().is_none(),
            });
        }

        Ok(EntryState::Other)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_empty_dir(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }

    #[cfg(unix)]
    fn remove_link(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    // Directory links on Windows are removed as directories
    #[cfg(not(unix))]
    fn remove_link(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir(path)
            .or_else(|_| fs::remove_file(path))
            .map_err(|e| FsError::from_io(path, e))
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
const ELOOP: i32 = 40;
#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
const ELOOP: i32 = 62;

/// Errors that mean nothing can exist at the path: a missing entry, a
/// regular file used as a parent directory, or a symlink cycle.
fn is_absent(err: &io::Error) -> bool {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => true,
        _ => is_link_loop(err),
    }
}

#[cfg(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
))]
fn is_link_loop(err: &io::Error) -> bool {
    err.raw_os_error() == Some(ELOOP)
}

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly"
)))]
fn is_link_loop(_err: &io::Error) -> bool {
    false
}
