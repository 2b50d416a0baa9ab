//! Domain Layer
//!
//! Pure types and ports for manifest-driven deletion.
//!
//! ## Structure
//!
//! - `entities/` - The manifest and its entries
//! - `value_objects/` - Immutable value types (FailurePolicy)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, event sink)
//!
//! This layer never touches the file system directly; all I/O goes through
//! the `FileSystem` port.

pub mod entities;
pub mod ports;
pub mod value_objects;
