//! Test support utilities for burn integration tests.
//!
//! Provides an isolated HOME and working directory per test.

#![allow(dead_code)]

pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own working dir and home dir. Child processes use
/// `.current_dir()` and `HOME`, so tests can run in parallel.
pub struct Test {
    /// Working directory for the burn process
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create an empty environment with no ~/.aws directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create an environment whose ~/.aws/credentials holds `content`.
    pub fn with_credentials(content: &str) -> Self {
        let t = Self::new();
        t.write_aws("credentials", content);
        t
    }

    /// Write `<home>/.aws/<name>`, creating parent directories.
    pub fn write_aws(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home.path().join(".aws").join(name);
        fs::create_dir_all(path.parent().expect("aws path has a parent"))
            .expect("failed to create aws dir");
        fs::write(&path, content).expect("failed to write aws file");
        path
    }

    /// Drop a role cache file into ~/.aws/cli/cache.
    pub fn write_cache(&self, name: &str, content: &str) -> PathBuf {
        self.write_aws(&format!("cli/cache/{}", name), content)
    }

    /// Path inside the working directory.
    pub fn out(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Read a file from the working directory.
    pub fn read_out(&self, name: &str) -> String {
        fs::read_to_string(self.out(name)).expect("failed to read output file")
    }
}
