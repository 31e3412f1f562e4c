//! JSON Event Sink
//!
//! Outputs scaffold events as NDJSON for automation consumption.

use crate::domain::ports::{ScaffoldEvent, ScaffoldEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

pub fn event_to_json(event: &ScaffoldEvent) -> serde_json::Value {
    match event {
        ScaffoldEvent::Cloning { url, destination } => serde_json::json!({
            "event": "clone_start",
            "command": "create",
            "url": url,
            "destination": destination.display().to_string(),
        }),
        ScaffoldEvent::RemovingHistory { path } => serde_json::json!({
            "event": "history_removed",
            "command": "create",
            "path": path.display().to_string(),
        }),
        ScaffoldEvent::ReplacingPlaceholders => serde_json::json!({
            "event": "replace_start",
            "command": "create",
        }),
        ScaffoldEvent::FileUpdated { path } => serde_json::json!({
            "event": "item_updated",
            "command": "create",
            "path": path.display().to_string(),
        }),
        ScaffoldEvent::FileUnchanged { path } => serde_json::json!({
            "event": "item_unchanged",
            "command": "create",
            "path": path.display().to_string(),
        }),
        ScaffoldEvent::EntrySkipped { path, reason } => serde_json::json!({
            "event": "item_skipped",
            "command": "create",
            "path": path.display().to_string(),
            "reason": reason,
        }),
        ScaffoldEvent::Completed {
            project_dir,
            updated_count,
            skipped_count,
        } => serde_json::json!({
            "event": "complete",
            "command": "create",
            "status": if *skipped_count == 0 { "success" } else { "partial" },
            "project_dir": project_dir.display().to_string(),
            "updated": updated_count,
            "skipped": skipped_count,
        }),
    }
}

impl ScaffoldEventSink for JsonEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        self.write_event(event_to_json(&event));
    }
}
