//! File processor
//!
//! Reads each file, scrubs it, and overwrites it in place. A failure on one
//! file is recorded and reported; the run always continues to the next path.
//! There is no rollback: a failed write may leave the original content.

use std::path::{Path, PathBuf};

use crate::error::ScrubResult;
use crate::events::{ScrubEvent, ScrubEventSink};
use crate::fs::FileSystem;
use crate::scrubber::{ScrubStats, Scrubber};

/// Result for a single path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Stats on success, the failure description otherwise
    pub result: Result<ScrubStats, String>,
}

impl FileOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes for a whole run, in input order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub outcomes: Vec<FileOutcome>,
}

impl RunReport {
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.processed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }

    pub fn lines_removed(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|stats| stats.lines_removed)
            .sum()
    }
}

/// Runs the scrubber over files through a [`FileSystem`]
pub struct Processor<F: FileSystem> {
    scrubber: Scrubber,
    fs: F,
}

impl<F: FileSystem> Processor<F> {
    pub fn new(scrubber: Scrubber, fs: F) -> Self {
        Self { scrubber, fs }
    }

    /// Read, scrub, and overwrite one file
    ///
    /// The file is written back even when nothing was removed.
    pub fn process_file(&self, path: &Path) -> ScrubResult<ScrubStats> {
        let content = self.fs.read_to_string(path)?;
        let scrubbed = self.scrubber.scrub(&content);
        self.fs.write(path, &scrubbed.content)?;

        tracing::info!(
            path = %path.display(),
            statements = scrubbed.stats.statements_removed,
            lines = scrubbed.stats.lines_removed,
            "processed"
        );
        if scrubbed.stats.unterminated {
            tracing::warn!(
                path = %path.display(),
                "file ended inside a diagnostic statement; removed through end of file"
            );
        }
        Ok(scrubbed.stats)
    }

    /// Process every path in order; never stops early
    pub fn run<P: AsRef<Path>>(&self, paths: &[P], sink: &dyn ScrubEventSink) -> RunReport {
        sink.on_event(ScrubEvent::Started { total: paths.len() });

        let mut report = RunReport::default();
        for (index, path) in paths.iter().enumerate() {
            let path = path.as_ref();
            let result = self.process_file(path).map_err(|e| e.to_string());

            match &result {
                Ok(stats) => sink.on_event(ScrubEvent::FileProcessed {
                    index,
                    path: path.to_path_buf(),
                    stats: *stats,
                }),
                Err(error) => {
                    tracing::debug!(path = %path.display(), %error, "failed");
                    sink.on_event(ScrubEvent::FileFailed {
                        index,
                        path: path.to_path_buf(),
                        error: error.clone(),
                    })
                }
            }

            report.outcomes.push(FileOutcome {
                path: path.to_path_buf(),
                result,
            });
        }

        sink.on_event(ScrubEvent::Completed {
            processed: report.processed(),
            failed: report.failed(),
            lines_removed: report.lines_removed(),
        });
        report
    }
}
