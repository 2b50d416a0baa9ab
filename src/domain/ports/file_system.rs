//! FileSystem port - abstraction over the removal operations a sweep needs
//!
//! This trait allows the use case to delete entries without depending on
//! concrete implementations (local disk, mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// I/O error
    Io { path: PathBuf, source: std::io::Error },
}

impl FsError {
    /// Classify an I/O error by kind, keeping the path it happened on
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "permission denied: {}", path.display())
            }
            FsError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// What currently sits at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Nothing at this path
    Missing,
    /// A regular file (or a link to one)
    File,
    /// A real directory; `empty` means it can be removed directly
    Directory { empty: bool },
    /// A symbolic link whose target is a directory
    DirectoryLink,
    /// Something else (socket, fifo, device)
    Other,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test mocks - in-memory, with injected failures
pub trait FileSystem {
    /// Inspect what exists at `path`. A missing path is `Ok(EntryState::Missing)`,
    /// not an error.
    fn probe(&self, path: &Path) -> FsResult<EntryState>;

    /// Remove a single file (or a link to one)
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove an empty directory
    fn remove_empty_dir(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a link itself, leaving its target alone
    fn remove_link(&self, path: &Path) -> FsResult<()>;
}
