//! logscrub CLI
//!
//! Usage: logscrub [OPTIONS] [PATHS]...

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, ColorWhen};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_color = match cli.color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => std::io::stderr().is_terminal(),
    };
    logging::init(cli.verbose, log_color);

    commands::scrub::cmd_scrub(&cli)
}
