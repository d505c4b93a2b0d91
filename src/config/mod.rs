//! Configuration module for logscrub
//!
//! Precedence:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LOGSCRUB_*)
//! 3. Config file (`--config`, `./logscrub.toml`, or the user config dir)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    discover, load_with_warnings, with_env_overrides, ConfigWarning, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, MarkersConfig, OutputConfig, ScanConfig, WriteConfig};
