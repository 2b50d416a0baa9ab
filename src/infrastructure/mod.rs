//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementations (Local)
//! - `events/` - Event sinks (JSON)

pub mod events;
pub mod fs;

// Re-export for convenience
pub use events::JsonEventSink;
pub use fs::LocalFs;
