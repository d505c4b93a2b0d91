//! Test environment for running the logscrub binary in isolation.
//!
//! `HOME` and `XDG_CONFIG_HOME` point into a temp dir so a developer's own
//! user config never leaks into a test run.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

pub mod fixtures;

/// Result of running the logscrub binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated project and home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            home_dir: tempfile::tempdir().expect("home tempdir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write project file");
        path
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative)).expect("read project file")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(env!("CARGO_BIN_EXE_logscrub"))
            .current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("LANG", "en_US.UTF-8")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env("TERM", "xterm-256color")
            .env_remove("RUST_LOG")
            .env_remove("LOGSCRUB_MARKERS")
            .env_remove("LOGSCRUB_METHODS")
            .env_remove("LOGSCRUB_ATOMIC_WRITES")
            .output()
            .expect("run logscrub");

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
