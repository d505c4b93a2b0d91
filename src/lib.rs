//! logscrub - strip emoji-tagged debug logging from front-end sources
//!
//! Scans a list of files and removes `console.log` / `console.warn`
//! statements that carry a marker glyph (`console.log("🔍 ...")`), including
//! statements formatted across several lines. `console.error` and untagged
//! calls are left alone. Files are overwritten in place.

pub mod config;
pub mod error;
pub mod events;
pub mod fs;
pub mod markers;
pub mod processor;
pub mod scrubber;

// Re-exports for convenience
pub use config::{Config, ConfigWarning, LoadedConfig};
pub use error::{ScrubError, ScrubResult};
pub use events::{NoopEventSink, RecordingEventSink, ScrubEvent, ScrubEventSink};
pub use fs::{FileSystem, LocalFs};
pub use markers::{MarkerSet, DEFAULT_GLYPHS};
pub use processor::{FileOutcome, Processor, RunReport};
pub use scrubber::{scrub, DiagnosticMatcher, ScrubStats, Scrubbed, Scrubber, DEFAULT_METHODS};
