//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScrubError, ScrubResult};

use super::types::Config;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "logscrub.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// A loaded config and where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ScrubResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ScrubError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ScrubError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the config to use
///
/// 1. `explicit` (from `--config`); a missing file is an error
/// 2. `<cwd>/logscrub.toml`
/// 3. `<user config dir>/logscrub/config.toml`
/// 4. Built-in defaults
///
/// Environment overrides are applied on top of whichever is found.
pub fn discover(explicit: Option<&Path>, cwd: &Path) -> ScrubResult<LoadedConfig> {
    let candidates: Vec<PathBuf> = match explicit {
        Some(path) => vec![path.to_path_buf()],
        None => {
            let mut found = vec![cwd.join(PROJECT_CONFIG_FILE)];
            if let Some(user_dir) = dirs::config_dir() {
                found.push(user_dir.join("logscrub").join("config.toml"));
            }
            found.retain(|p| p.is_file());
            found
        }
    };

    match candidates.into_iter().next() {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(LoadedConfig {
                config: with_env_overrides(config),
                source: Some(path),
                warnings,
            })
        }
        None => Ok(LoadedConfig {
            config: with_env_overrides(Config::default()),
            source: None,
            warnings: Vec::new(),
        }),
    }
}

/// Apply environment variable overrides (LOGSCRUB_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // LOGSCRUB_MARKERS (comma-separated, added to the active set)
    if let Some(markers) = var("LOGSCRUB_MARKERS") {
        config
            .markers
            .extra
            .extend(split_list(&markers).map(str::to_string));
    }

    // LOGSCRUB_METHODS (comma-separated, replaces the list)
    if let Some(methods) = var("LOGSCRUB_METHODS") {
        let parsed: Vec<String> = split_list(&methods).map(str::to_string).collect();
        if !parsed.is_empty() {
            config.scan.methods = parsed;
        }
    }

    // LOGSCRUB_ATOMIC_WRITES
    if let Some(val) = var("LOGSCRUB_ATOMIC_WRITES") {
        config.write.atomic = val.to_lowercase() != "false" && val != "0";
    }

    config
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "files", "markers", "glyphs", "extra", "scan", "methods", "write", "atomic", "output",
        "color", "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
