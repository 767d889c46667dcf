//! Test utilities for building temporary project trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with arbitrary bytes, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Populate a small web project with `node_modules` and a lock file.
    pub fn with_web_project() -> Self {
        let tree = Self::new();
        tree.add_file("package.json", "{\n  \"name\": \"demo\"\n}\n");
        tree.add_file("package-lock.json", "{\n  \"lockfileVersion\": 3\n}\n");
        tree.add_file("src/index.js", "console.log('hello');\n");
        tree.add_file("src/util.ts", "export const x = 1;\n");
        tree.add_file("node_modules/left-pad/index.js", "module.exports = pad;\n");
        tree.add_file("node_modules/left-pad/package.json", "{}\n");
        tree
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
