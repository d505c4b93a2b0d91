//! Tests for the config module

use super::loader::{apply_overrides, discover, PROJECT_CONFIG_FILE};
use super::types::*;
use crate::error::ScrubError;
use std::fs;
use tempfile::tempdir;

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(config.files.is_empty());
    assert_eq!(config.scan.methods, vec!["log", "warn"]);
    assert!(config.write.atomic);
    assert!(config.output.unicode);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert_eq!(config.marker_set(), crate::markers::MarkerSet::default());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
files = ["src/lib/testMappers.ts", "src/hooks/useMembers.ts"]

[markers]
glyphs = ["🔍", "📝"]
extra = ["🧪"]

[scan]
methods = ["log", "debug"]

[write]
atomic = false

[output]
color = "never"
unicode = false
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.files.len(), 2);
    assert_eq!(config.scan.methods, vec!["log", "debug"]);
    assert!(!config.write.atomic);
    assert_eq!(config.output.color, ColorMode::Never);

    let markers = config.marker_set();
    assert_eq!(markers.len(), 3);
    assert!(markers.contains('🧪'));
    assert!(!markers.contains('🚀'));
}

#[test]
fn test_extra_markers_extend_defaults() {
    let toml = r#"
[markers]
extra = ["🧪"]
"#;
    let config: Config = toml::from_str(toml).unwrap();
    let markers = config.marker_set();

    assert!(markers.contains('🧪'));
    assert!(markers.contains('🚀'));
}

#[test]
fn test_scrubber_rejects_bad_method() {
    let mut config = Config::default();
    config.scan.methods = vec!["not a name".to_string()];

    assert!(matches!(
        config.scrubber(),
        Err(ScrubError::InvalidMethod { .. })
    ));
}

#[test]
fn test_load_warns_on_unknown_key() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logscrub.toml");
    fs::write(&path, "[scan]\nmethod = [\"log\"]\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.scan.methods, vec!["log", "warn"]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "method");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("methods"));
}

#[test]
fn test_load_invalid_toml_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("logscrub.toml");
    fs::write(&path, "files = [\n").unwrap();

    let err = Config::load(&path).unwrap_err();

    assert!(matches!(err, ScrubError::InvalidConfig { .. }));
    assert!(err.to_string().contains("logscrub.toml"));
}

#[test]
fn test_discover_prefers_explicit_path() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "files = [\"a.ts\"]\n").unwrap();
    let explicit = dir.path().join("other.toml");
    fs::write(&explicit, "files = [\"b.ts\"]\n").unwrap();

    let loaded = discover(Some(&explicit), dir.path()).unwrap();

    assert_eq!(loaded.source.as_deref(), Some(explicit.as_path()));
    assert_eq!(loaded.config.files, vec![std::path::PathBuf::from("b.ts")]);
}

#[test]
fn test_discover_missing_explicit_path_is_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = discover(Some(&missing), dir.path()).unwrap_err();

    assert!(matches!(err, ScrubError::Io { .. }));
}

#[test]
fn test_discover_project_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(PROJECT_CONFIG_FILE), "files = [\"a.ts\"]\n").unwrap();

    let loaded = discover(None, dir.path()).unwrap();

    assert_eq!(loaded.config.files, vec![std::path::PathBuf::from("a.ts")]);
    assert!(loaded.warnings.is_empty());
}

#[test]
fn test_env_overrides() {
    let env = |key: &str| match key {
        "LOGSCRUB_MARKERS" => Some("🧪, 🐛".to_string()),
        "LOGSCRUB_METHODS" => Some("debug,trace".to_string()),
        "LOGSCRUB_ATOMIC_WRITES" => Some("0".to_string()),
        _ => None,
    };

    let config = apply_overrides(Config::default(), env);

    assert_eq!(config.markers.extra, vec!["🧪", "🐛"]);
    assert_eq!(config.scan.methods, vec!["debug", "trace"]);
    assert!(!config.write.atomic);
}

#[test]
fn test_env_overrides_absent_leave_config_alone() {
    let config = apply_overrides(Config::default(), no_env);
    assert_eq!(config, Config::default());
}

#[test]
fn test_env_empty_methods_are_ignored() {
    let env = |key: &str| (key == "LOGSCRUB_METHODS").then(|| " , ".to_string());
    let config = apply_overrides(Config::default(), env);
    assert_eq!(config.scan.methods, vec!["log", "warn"]);
}
