//! Common test utilities for skillrepos integration tests

use std::path::PathBuf;
use tempfile::TempDir;

use assert_cmd::Command;

/// A throwaway data directory for one test
pub struct TestHome {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the data directory
    pub path: PathBuf,
}

impl TestHome {
    /// Create a new test home
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Command for the real binary, pointed at this home
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skillrepos").expect("skillrepos binary");
        cmd.env("SKILLREPOS_HOME", &self.path);
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Write a file in the home directory
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from the home directory
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }
}
