//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and presentation layers provide concrete implementations.

pub mod file_system;
pub mod sweep_events;

pub use file_system::{EntryState, FileSystem, FsError, FsResult};
pub use sweep_events::{NoopEventSink, SweepEvent, SweepEventSink};
