use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// logscrub - remove emoji-tagged console.log/console.warn statements
#[derive(Parser, Debug)]
#[command(name = "logscrub")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Files are overwritten in place. Review the changes afterwards.")]
pub struct Cli {
    /// Files to scrub, in order (defaults to `files` from the config)
    pub paths: Vec<PathBuf>,

    /// Config file (defaults to ./logscrub.toml, then the user config dir)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Extra marker glyph (repeatable)
    #[arg(long = "marker", value_name = "GLYPH")]
    pub markers: Vec<String>,

    /// Console method to match, replacing the configured list (repeatable)
    #[arg(long = "method", value_name = "NAME")]
    pub methods: Vec<String>,

    /// Exit with status 1 if any file failed
    #[arg(long)]
    pub strict: bool,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
