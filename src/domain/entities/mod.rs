//! Domain Entities
//!
//! - `Manifest` - The ordered list of entries targeted for deletion
//! - `ManifestEntry` - One relative path plus its kind

mod manifest;

pub use manifest::{EntryKind, Manifest, ManifestEntry};
