//! Scrub command handler
//!
//! Resolves config, builds the scrubber, and runs it over the file list.

use std::path::PathBuf;

use anyhow::{Context, Result};

use logscrub::config::{self, Config};
use logscrub::{LocalFs, Processor, ScrubError, ScrubEventSink};

use crate::cli::Cli;
use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::json::JsonEventSink;
use crate::ui::output::print_config_warnings;

/// Execute the scrub run
pub fn cmd_scrub(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let loaded = config::discover(cli.config.as_deref(), &cwd)?;
    let config = apply_cli_overrides(loaded.config, cli);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &config);

    if let Some(source) = &loaded.source {
        for w in &loaded.warnings {
            tracing::warn!(key = %w.key, file = %w.file.display(), "unknown config key");
        }
        if !cli.json {
            print_config_warnings(source, &loaded.warnings, &ui);
        }
    }

    let paths = resolve_paths(cli, &config)?;
    let scrubber = config.scrubber()?;
    tracing::debug!(
        markers = scrubber.matcher().markers().len(),
        methods = ?config.scan.methods,
        files = paths.len(),
        "starting run"
    );

    let fs = LocalFs::new().with_atomic_writes(config.write.atomic);
    let processor = Processor::new(scrubber, fs);

    let sink: Box<dyn ScrubEventSink> = if cli.json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(ConsoleEventSink::stdio(ui))
    };
    let report = processor.run(&paths, sink.as_ref());

    if cli.strict && report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}

/// Fold `--marker` and `--method` into the loaded config
fn apply_cli_overrides(mut config: Config, cli: &Cli) -> Config {
    config.markers.extra.extend(cli.markers.iter().cloned());
    if !cli.methods.is_empty() {
        config.scan.methods = cli.methods.clone();
    }
    config
}

/// Command-line paths win; otherwise the config manifest
fn resolve_paths(cli: &Cli, config: &Config) -> Result<Vec<PathBuf>, ScrubError> {
    let paths = if cli.paths.is_empty() {
        config.files.clone()
    } else {
        cli.paths.clone()
    };
    if paths.is_empty() {
        return Err(ScrubError::NoFiles);
    }
    Ok(paths)
}
