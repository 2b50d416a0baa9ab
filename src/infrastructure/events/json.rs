//! JSON Event Sink
//!
//! Outputs sweep events as NDJSON for CI/automation consumption.

use crate::domain::ports::{SweepEvent, SweepEventSink};
use crate::domain::value_objects::Outcome;
use std::cell::RefCell;
use std::io::{self, Write};

/// Event sink that outputs one JSON object per line
pub struct JsonEventSink {
    writer: RefCell<Box<dyn Write>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: RefCell::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        let mut writer = self.writer.borrow_mut();
        let _ = writeln!(writer, "{}", event);
        let _ = writer.flush();
    }
}

impl SweepEventSink for JsonEventSink {
    fn on_event(&self, event: SweepEvent) {
        let json = match event {
            SweepEvent::Started { root, entry_count } => serde_json::json!({
                "event": "start",
                "command": "run",
                "version": env!("CARGO_PKG_VERSION"),
                "root": root.display().to_string(),
                "entry_count": entry_count,
            }),

            SweepEvent::GroupStarted { label } => serde_json::json!({
                "event": "group",
                "label": label,
            }),

            SweepEvent::EntryFinished {
                index,
                entry,
                outcome,
            } => {
                let mut json = serde_json::json!({
                    "event": "entry",
                    "index": index,
                    "path": entry.path,
                    "kind": entry.kind.as_str(),
                    "status": outcome.status(),
                });
                match &outcome {
                    Outcome::Deleted(removal) => {
                        json["removal"] = serde_json::json!(removal.as_str());
                    }
                    Outcome::Failed(reason) => {
                        json["reason"] = serde_json::json!(reason);
                    }
                    Outcome::SkippedMissing => {}
                }
                json
            }

            SweepEvent::Completed {
                deleted,
                skipped,
                failed,
            } => serde_json::json!({
                "event": "complete",
                "command": "run",
                "success": failed == 0,
                "deleted": deleted,
                "skipped_missing": skipped,
                "failed": failed,
            }),
        };

        self.write_event(json);
    }
}
