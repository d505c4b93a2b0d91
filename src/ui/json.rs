//! JSON Event Sink
//!
//! Outputs scrub events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use logscrub::{ScrubEvent, ScrubEventSink};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
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

pub fn event_to_json(event: &ScrubEvent) -> serde_json::Value {
    match event {
        ScrubEvent::Started { total } => serde_json::json!({
            "event": "start",
            "file_count": total,
        }),
        ScrubEvent::FileProcessed { index, path, stats } => serde_json::json!({
            "event": "file_processed",
            "index": index,
            "path": path.display().to_string(),
            "lines_removed": stats.lines_removed,
            "statements_removed": stats.statements_removed,
            "unterminated": stats.unterminated,
        }),
        ScrubEvent::FileFailed { index, path, error } => serde_json::json!({
            "event": "file_failed",
            "index": index,
            "path": path.display().to_string(),
            "error": error,
        }),
        ScrubEvent::Completed {
            processed,
            failed,
            lines_removed,
        } => serde_json::json!({
            "event": "complete",
            "processed": processed,
            "failed": failed,
            "lines_removed": lines_removed,
        }),
    }
}

impl ScrubEventSink for JsonEventSink {
    fn on_event(&self, event: ScrubEvent) {
        self.write_event(event_to_json(&event));
    }
}
