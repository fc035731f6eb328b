//! Scratch directory and command runner for integration tests.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use hicolor::models::RasterImage;
use hicolor::services::{load_png, save_png};
use tempfile::TempDir;

/// A temporary directory that is removed when the test ends.
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the workspace.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Save `image` as a PNG named `name` and return its path.
    pub fn write_png(&self, name: &str, image: &RasterImage) -> PathBuf {
        let path = self.path(name);
        save_png(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Write raw bytes to `name` and return its path.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    pub fn read_png(&self, path: &Path) -> RasterImage {
        load_png(path).expect("Failed to read PNG")
    }

    /// Run the `hicolor` binary with the workspace as working directory.
    pub fn run(&self, args: &[&str]) -> CommandResult {
        let output = Command::new(env!("CARGO_BIN_EXE_hicolor"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("HICOLOR_CONFIG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run hicolor");
        CommandResult { output }
    }
}

/// Captured output of one CLI invocation.
pub struct CommandResult {
    pub output: Output,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Panic with both streams if the command failed.
    pub fn assert_success(&self) {
        assert!(
            self.success(),
            "Command failed with {}.\nstdout: {}\nstderr: {}",
            self.output.status,
            self.stdout(),
            self.stderr()
        );
    }
}
