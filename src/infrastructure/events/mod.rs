//! Machine-readable sinks for sweep progress.

mod json;

pub use json::JsonEventSink;
