//! Common test utilities for integration tests.
//!
//! This module provides a small fixture builder for laying out directory
//! trees on disk, plus helpers for comparing search results.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary directory tree.
///
/// Paths ending in `/` are created as directories; everything else is
/// written as a file, creating parent directories as needed.
///
/// # Examples
///
/// ```no_run
/// # use common::TreeFixture;
/// let tree = TreeFixture::new()
///     .with_dir("src/")
///     .with_file("src/lib.rs", "")
///     .build();
/// ```
#[allow(dead_code)]
pub struct TreeFixture {
    entries: Vec<(String, Vec<u8>)>,
}

#[allow(dead_code)]
impl TreeFixture {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an empty directory.
    pub fn with_dir(mut self, path: &str) -> Self {
        let path = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };
        self.entries.push((path, Vec::new()));
        self
    }

    /// Adds a file with the given contents.
    pub fn with_file(mut self, path: &str, contents: &str) -> Self {
        self.entries
            .push((path.to_string(), contents.as_bytes().to_vec()));
        self
    }

    /// Adds a file of `len` bytes.
    pub fn with_sized_file(mut self, path: &str, len: usize) -> Self {
        self.entries.push((path.to_string(), vec![b'x'; len]));
        self
    }

    /// Writes the tree into a fresh temporary directory.
    pub fn build(self) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (path, contents) in self.entries {
            let target = dir.path().join(path.trim_end_matches('/'));
            if path.ends_with('/') {
                fs::create_dir_all(&target).unwrap();
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).unwrap();
                }
                fs::write(&target, contents).unwrap();
            }
        }
        dir
    }
}

impl Default for TreeFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small project-shaped tree used by several suites.
///
/// ```text
/// README.md
/// .env
/// .git/HEAD
/// docs/guide.md
/// src/lib.rs
/// src/bin/tool.rs
/// target/debug/big.bin      (8 KiB)
/// ```
#[allow(dead_code)]
pub fn project_tree() -> TempDir {
    TreeFixture::new()
        .with_file("README.md", "# project\n")
        .with_file(".env", "TOKEN=1\n")
        .with_file(".git/HEAD", "ref: refs/heads/main\n")
        .with_file("docs/guide.md", "guide\n")
        .with_file("src/lib.rs", "pub fn lib() {}\n")
        .with_file("src/bin/tool.rs", "fn main() {}\n")
        .with_sized_file("target/debug/big.bin", 8 * 1024)
        .build()
}

/// Strips `base` from each path and normalizes separators to `/`.
#[allow(dead_code)]
pub fn relative_to(base: &Path, paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| {
            p.strip_prefix(base)
                .unwrap_or(p)
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// Like [`relative_to`], sorted for order-insensitive comparison.
#[allow(dead_code)]
pub fn sorted_relative(base: &Path, paths: &[PathBuf]) -> Vec<String> {
    let mut relative = relative_to(base, paths);
    relative.sort();
    relative
}
