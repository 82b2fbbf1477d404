//! Integration tests for the configuration system.
//!
//! This suite validates the complete workflow of configuration: file
//! discovery, merging, environment variable overrides, and validation, and
//! that a built configuration drives a search.
//!
//! ## Running Tests
//!
//! Tests that modify environment variables are marked with `#[serial]`.
//! Environment variables are process-global, so concurrent access would
//! cause race conditions. Other tests run in parallel.

mod common;

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use common::{sorted_relative, TreeFixture};
use pathsift::config::{ConfigBuilder, ConfigLoader, SearchConfig};
use pathsift::error::Error;
use pathsift::Finder;

// ============================================================================
// Test Utilities
// ============================================================================

fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_pathsift_env_vars() -> Vec<EnvGuard> {
    [
        "PATHSIFT_ROOTS",
        "PATHSIFT_INCLUDE_HIDDEN",
        "PATHSIFT_INCLUDE_DIRECTORIES",
        "PATHSIFT_MAX_DEPTH",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

// ============================================================================
// File Discovery
// ============================================================================

#[test]
fn test_discovery_walks_upward() {
    let tree = TreeFixture::new().with_dir("nested/deeply/").build();
    write_config(tree.path(), "pathsift.yaml", "extension: rs\n");

    let sources = ConfigLoader::discover(&tree.path().join("nested/deeply")).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].config.extension.as_deref(), Some("rs"));
    assert_eq!(sources[0].precedence, 1);
}

#[test]
fn test_discovery_stops_at_nearest_directory() {
    let tree = TreeFixture::new().with_dir("child/").build();
    write_config(tree.path(), "pathsift.yaml", "extension: md\n");
    write_config(&tree.path().join("child"), "pathsift.yaml", "extension: rs\n");

    let sources = ConfigLoader::discover(&tree.path().join("child")).unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].config.extension.as_deref(), Some("rs"));
}

#[test]
fn test_local_file_overrides_shared_file() {
    let tree = TreeFixture::new().build();
    write_config(
        tree.path(),
        "pathsift.yaml",
        "extension: rs\nsize: '>1k'\ninclude_hidden: false\n",
    );
    write_config(tree.path(), "pathsift.local.yaml", "include_hidden: true\n");

    let config = ConfigBuilder::new()
        .with_working_dir(tree.path())
        .skip_env()
        .build()
        .unwrap();
    assert_eq!(config.extension.as_deref(), Some("rs"));
    assert_eq!(config.size.as_deref(), Some(">1k"));
    assert!(config.include_hidden());
}

#[test]
fn test_unknown_field_is_configuration_error() {
    let tree = TreeFixture::new().build();
    let path = write_config(tree.path(), "pathsift.yaml", "extensions: [rs]\n");

    let err = ConfigLoader::load_file(&path).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_files() {
    let _env = clear_pathsift_env_vars();
    let tree = TreeFixture::new().build();
    write_config(tree.path(), "pathsift.yaml", "max_depth: 5\ninclude_directories: true\n");

    let _depth = EnvGuard::new("PATHSIFT_MAX_DEPTH", "1");
    let _dirs = EnvGuard::new("PATHSIFT_INCLUDE_DIRECTORIES", "no");

    let config = ConfigBuilder::new()
        .with_working_dir(tree.path())
        .build()
        .unwrap();
    assert_eq!(config.max_depth, Some(1));
    assert!(!config.include_directories());
}

#[test]
#[serial]
fn test_env_roots_replace_file_roots() {
    let _env = clear_pathsift_env_vars();
    let tree = TreeFixture::new().with_dir("one/").with_dir("two/").build();
    write_config(tree.path(), "pathsift.yaml", "roots: [/nowhere]\n");

    let roots = env::join_paths([tree.path().join("one"), tree.path().join("two")]).unwrap();
    let _roots = EnvGuard::new("PATHSIFT_ROOTS", roots.to_str().unwrap());

    let config = ConfigBuilder::new()
        .with_working_dir(tree.path())
        .build()
        .unwrap();
    assert_eq!(
        config.roots,
        vec![tree.path().join("one"), tree.path().join("two")]
    );
}

#[test]
#[serial]
fn test_env_invalid_value_is_rejected() {
    let _env = clear_pathsift_env_vars();
    let _hidden = EnvGuard::new("PATHSIFT_INCLUDE_HIDDEN", "sometimes");

    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "PATHSIFT_INCLUDE_HIDDEN"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validation_reports_bad_expression() {
    let tree = TreeFixture::new().build();
    write_config(tree.path(), "pathsift.yaml", "modified: 'last tuesday'\n");

    let err = ConfigBuilder::new()
        .with_working_dir(tree.path())
        .skip_env()
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "modified"));
}

#[test]
fn test_programmatic_overrides_win() {
    let tree = TreeFixture::new().build();
    write_config(tree.path(), "pathsift.yaml", "extension: md\n");

    let config = ConfigBuilder::new()
        .with_working_dir(tree.path())
        .skip_env()
        .with_config(SearchConfig {
            extension: Some("txt".into()),
            ..Default::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.extension.as_deref(), Some("txt"));
}

// ============================================================================
// End to End
// ============================================================================

#[test]
fn test_config_file_drives_search() {
    let tree = TreeFixture::new()
        .with_file("notes/today.md", "today")
        .with_file("notes/archive/2020.md", "old")
        .with_file("notes/todo.txt", "todo")
        .build();
    write_config(tree.path(), "pathsift.yaml", "extension: md\nmax_depth: 2\n");

    let mut config = ConfigBuilder::new()
        .with_working_dir(tree.path())
        .skip_env()
        .build()
        .unwrap();
    config.roots = vec![tree.path().to_path_buf()];

    let found = Finder::new(&config).unwrap().find().unwrap();
    assert_eq!(sorted_relative(tree.path(), &found), vec!["notes/today.md"]);
}
