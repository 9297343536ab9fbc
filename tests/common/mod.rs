// Shared helpers for the binary-level tests in cli_contract.rs and cli_flows.rs.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Home directory injected into every child process.
pub const TEST_HOME: &str = "/home/tester";

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_merge-settings"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Runs the binary with the given args and a fixed `$HOME`.
/// Returns (stdout, stderr, exit_code).
pub fn run_merge(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(binary_path())
        .args(args)
        .env("HOME", TEST_HOME)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// A scratch directory with conventional input/output file names.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes `existing.json` and returns its path as a string.
    pub fn existing(&self, content: &str) -> String {
        let path = self.path("existing.json");
        std::fs::write(&path, content).expect("failed to write existing settings");
        path_str(&path)
    }

    /// Writes raw bytes to `existing.json` and returns its path as a string.
    pub fn existing_bytes(&self, content: &[u8]) -> String {
        let path = self.path("existing.json");
        std::fs::write(&path, content).expect("failed to write existing settings");
        path_str(&path)
    }

    /// Path of a settings file that does not exist.
    pub fn absent(&self) -> String {
        path_str(&self.path("absent.json"))
    }

    pub fn output(&self) -> String {
        path_str(&self.path("output.json"))
    }

    pub fn read_output(&self) -> String {
        std::fs::read_to_string(self.path("output.json")).expect("output file should exist")
    }

    pub fn output_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read_output()).expect("output should be valid JSON")
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_str().expect("temp path is UTF-8").to_string()
}

/// The single command configured for `event` in a merged settings value.
pub fn command_for<'a>(value: &'a serde_json::Value, event: &str) -> &'a str {
    value["hooks"][event][0]["hooks"][0]["command"]
        .as_str()
        .unwrap_or_else(|| panic!("missing command for {event}"))
}

pub const COMMAND_EVENTS: [&str; 3] = ["Notification", "Stop", "SubagentStop"];
