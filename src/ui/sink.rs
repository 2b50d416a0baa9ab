//! Console event sink
//!
//! Prints a group heading when the group changes and one status line per
//! finished entry. The header and the summary block are rendered by the
//! command itself.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::ui::context::UiContext;
use crate::ui::views::sweep::{render_entry_line, render_group_heading};
use sweep::domain::ports::{SweepEvent, SweepEventSink};

pub struct ConsoleEventSink {
    writer: RefCell<Box<dyn Write>>,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    pub fn stdout(ui: &UiContext) -> Self {
        Self::with_writer(io::stdout(), ui)
    }

    pub fn with_writer<W: Write + 'static>(writer: W, ui: &UiContext) -> Self {
        Self {
            writer: RefCell::new(Box::new(writer)),
            color: ui.color,
            unicode: ui.unicode,
        }
    }

    fn write(&self, text: &str) {
        let mut writer = self.writer.borrow_mut();
        let _ = writer.write_all(text.as_bytes());
        let _ = writer.flush();
    }
}

impl SweepEventSink for ConsoleEventSink {
    fn on_event(&self, event: SweepEvent) {
        match event {
            SweepEvent::GroupStarted { label } => {
                self.write(&render_group_heading(&label, self.color, self.unicode));
            }
            SweepEvent::EntryFinished { entry, outcome, .. } => {
                self.write(&render_entry_line(
                    &entry,
                    &outcome,
                    self.color,
                    self.unicode,
                ));
            }
            SweepEvent::Started { .. } | SweepEvent::Completed { .. } => {}
        }
    }
}
