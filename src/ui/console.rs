//! Human-readable run output
//!
//! One line per file on stdout (success) or stderr (failure), in input order,
//! then a closing reminder to review the edits.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use crossterm::style::Stylize;
use logscrub::{ScrubEvent, ScrubEventSink, ScrubStats};

use crate::ui::context::UiContext;
use crate::ui::icon::Icon;
use crate::ui::theme;

pub fn render_processed(path: &Path, stats: &ScrubStats, ui: &UiContext) -> String {
    let mut line = format!(
        "{} Processed {}",
        Icon::Success.colored(ui.color, ui.unicode),
        path.display()
    );
    if ui.verbose > 0 {
        let detail = format!(
            "({} lines removed, {} statements)",
            stats.lines_removed, stats.statements_removed
        );
        line.push(' ');
        if ui.color {
            line.push_str(&format!("{}", detail.with(theme::colors::DIM)));
        } else {
            line.push_str(&detail);
        }
    }
    line
}

pub fn render_failed(path: &Path, error: &str, ui: &UiContext) -> String {
    format!(
        "{} Error processing {}: {}",
        Icon::Error.colored(ui.color, ui.unicode),
        path.display(),
        error
    )
}

pub fn render_done(processed: usize, failed: usize, lines_removed: usize, ui: &UiContext) -> String {
    let mut out = String::from("\nDone! Please review the changes.");
    if ui.verbose > 0 || failed > 0 {
        out.push_str(&format!(
            "\n{} processed, {} failed, {} lines removed",
            processed, failed, lines_removed
        ));
    }
    out
}

/// Event sink that prints the per-file report
pub struct ConsoleEventSink {
    ui: UiContext,
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdio(ui: UiContext) -> Self {
        Self::with_writers(ui, io::stdout(), io::stderr())
    }

    pub fn with_writers<O, E>(ui: UiContext, out: O, err: E) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            ui,
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
        }
    }

    fn write_line(target: &Mutex<Box<dyn Write + Send>>, line: &str) {
        if let Ok(mut writer) = target.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl ScrubEventSink for ConsoleEventSink {
    fn on_event(&self, event: ScrubEvent) {
        match event {
            ScrubEvent::Started { .. } => {}
            ScrubEvent::FileProcessed { path, stats, .. } => {
                Self::write_line(&self.out, &render_processed(&path, &stats, &self.ui));
            }
            ScrubEvent::FileFailed { path, error, .. } => {
                Self::write_line(&self.err, &render_failed(&path, &error, &self.ui));
            }
            ScrubEvent::Completed {
                processed,
                failed,
                lines_removed,
            } => {
                Self::write_line(
                    &self.out,
                    &render_done(processed, failed, lines_removed, &self.ui),
                );
            }
        }
    }
}
