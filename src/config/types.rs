//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScrubResult;
use crate::markers::MarkerSet;
use crate::scrubber::{Scrubber, DEFAULT_METHODS};

use super::loader::ConfigWarning;

/// Marker glyph configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkersConfig {
    /// Replaces the built-in set when present
    #[serde(default)]
    pub glyphs: Option<Vec<String>>,

    /// Added to whichever set is active
    #[serde(default)]
    pub extra: Vec<String>,
}

/// Scan configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
        }
    }
}

fn default_methods() -> Vec<String> {
    DEFAULT_METHODS.iter().map(|m| m.to_string()).collect()
}

/// Write configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteConfig {
    #[serde(default = "default_true")]
    pub atomic: bool,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self { atomic: true }
    }
}

fn default_true() -> bool {
    true
}

/// Color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            unicode: true,
        }
    }
}

/// Full configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Files to process when none are given on the command line
    #[serde(default)]
    pub files: Vec<PathBuf>,

    #[serde(default)]
    pub markers: MarkersConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub write: WriteConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> ScrubResult<Self> {
        Ok(Self::load_with_warnings(path)?.0)
    }

    /// Load configuration and collect unknown-key warnings
    pub fn load_with_warnings(path: &Path) -> ScrubResult<(Self, Vec<ConfigWarning>)> {
        super::loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (LOGSCRUB_* prefix)
    pub fn with_env_overrides(self) -> Self {
        super::loader::with_env_overrides(self)
    }

    /// Active marker set: configured glyphs (or the defaults) plus extras
    pub fn marker_set(&self) -> MarkerSet {
        let mut set = match &self.markers.glyphs {
            Some(glyphs) => MarkerSet::from_glyphs(glyphs),
            None => MarkerSet::default(),
        };
        set.extend(&self.markers.extra);
        set
    }

    /// Build the scrubber this config describes
    pub fn scrubber(&self) -> ScrubResult<Scrubber> {
        Scrubber::new(self.marker_set(), &self.scan.methods)
    }
}
