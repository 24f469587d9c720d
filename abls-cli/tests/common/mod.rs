//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a populated temporary directory
//! - Command builder helpers
//! - Output helpers for order-independent comparisons

use assert_cmd::Command;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Number of `fileN` entries created inside `testdir`.
#[allow(dead_code)]
pub const FILE_COUNT: usize = 10;

/// Test environment with an isolated directory tree.
///
/// The tree is `testdir/` holding `.hiddenfile`, `file0`..`file9`, and an
/// empty `subdir/`.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to `testdir`
    pub testdir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let testdir = temp_dir.path().join("testdir");
        fs::create_dir(&testdir).expect("Failed to create testdir");
        fs::write(testdir.join(".hiddenfile"), "").expect("Failed to create hidden file");
        for i in 0..FILE_COUNT {
            fs::write(testdir.join(format!("file{i}")), "").expect("Failed to create file");
        }
        fs::create_dir(testdir.join("subdir")).expect("Failed to create subdir");

        Self { temp_dir, testdir }
    }

    /// Get a command builder for the abls binary.
    ///
    /// Logging is forced to quiet so stderr only carries error messages.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("abls").expect("Failed to find abls binary");
        cmd.env("ABLS_LOG_MODE", "quiet");
        cmd
    }

    /// The directory holding `testdir`.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path inside `testdir`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.testdir.join(name)
    }

    /// Expected output line for a directory.
    pub fn dir_line(path: &Path) -> String {
        format!("{}{}", path.display(), std::path::MAIN_SEPARATOR)
    }

    /// Run with `args` and return stdout, asserting success.
    pub fn stdout_of(&self, args: &[&OsStr]) -> String {
        let output = self
            .command()
            .args(args)
            .output()
            .expect("Failed to run abls");

        assert!(
            output.status.success(),
            "abls failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Sort output lines for comparisons that must not depend on listing order.
#[allow(dead_code)]
pub fn sorted_lines(output: &str) -> Vec<String> {
    let mut lines: Vec<String> = output.lines().map(str::to_string).collect();
    lines.sort();
    lines
}
