//! Scrub Event Port
//!
//! Observable interface for a scrub run. The binary plugs in a console sink
//! or an NDJSON sink; tests record events.

use std::path::PathBuf;

use crate::scrubber::ScrubStats;

/// Event emitted while processing a file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrubEvent {
    /// Run started
    Started { total: usize },

    /// File was scrubbed and written back
    FileProcessed {
        index: usize,
        path: PathBuf,
        stats: ScrubStats,
    },

    /// File could not be read, decoded, or written
    FileFailed {
        index: usize,
        path: PathBuf,
        error: String,
    },

    /// Every path has been attempted
    Completed {
        processed: usize,
        failed: usize,
        lines_removed: usize,
    },
}

/// Trait for receiving scrub events
pub trait ScrubEventSink {
    fn on_event(&self, event: ScrubEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScrubEventSink for NoopEventSink {
    fn on_event(&self, _event: ScrubEvent) {}
}

/// Sink that keeps every event, in order
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: std::sync::Mutex<Vec<ScrubEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ScrubEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl ScrubEventSink for RecordingEventSink {
    fn on_event(&self, event: ScrubEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
