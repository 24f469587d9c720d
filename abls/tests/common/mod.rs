//! Common test utilities for integration tests.
//!
//! This module provides a fixture that mirrors a small working tree: a
//! `testdir` with one hidden file, ten regular files, and one subdirectory.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Number of `fileN` entries created inside `testdir`.
pub const FILE_COUNT: usize = 10;

/// A temporary tree for pipeline tests.
pub struct TestTree {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to `testdir`
    pub testdir: PathBuf,
}

#[allow(dead_code)]
impl TestTree {
    /// Create `testdir` with `.hiddenfile`, `file0`..`file9`, and `subdir/`.
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

    /// The directory holding `testdir`.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// A path inside `testdir`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.testdir.join(name)
    }

    /// Every absolute path `testdir` contains, sorted.
    pub fn children(&self) -> Vec<PathBuf> {
        let mut children: Vec<PathBuf> = fs::read_dir(&self.testdir)
            .expect("Failed to read testdir")
            .map(|e| e.expect("Failed to read entry").path())
            .collect();
        children.sort();
        children
    }
}

/// Sort output lines for comparisons that must not depend on listing order.
#[allow(dead_code)]
pub fn sorted_lines(output: &[u8]) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
