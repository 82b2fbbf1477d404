//! Predicate builders over file paths.
//!
//! Name-based predicates look only at the path text and cannot fail once
//! built. Metadata-based predicates stat the file on every call and return
//! `Result<bool>` so that a missing or unreadable file surfaces as an error
//! rather than a silent `false`.
//!
//! Patterns and comparison expressions are compiled when the predicate is
//! built, so a bad pattern fails up front instead of once per file.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, MAIN_SEPARATOR};

use glob::{MatchOptions, Pattern};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::compare::{Comparison, UnitKind};
use crate::error::{Error, Result};
use crate::fs::stats::{age_seconds, get_stats};

pub use crate::fs::stats::is_directory;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Which timestamp a time matcher reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeField {
    /// Last modification.
    Modified,
    /// Last access.
    Accessed,
}

/// Build a shell-glob name matcher.
///
/// A pattern without a `/` is matched against the file name only, so `*.rs`
/// matches `/src/lib.rs`. A pattern with a `/` is matched against the whole
/// path. `*` never crosses a separator and never matches a leading dot.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the pattern does not compile.
///
/// # Examples
///
/// ```
/// use pathsift::predicate::glob_matcher;
/// use std::path::Path;
///
/// let is_rust = glob_matcher("*.rs").unwrap();
/// assert!(is_rust(Path::new("/src/path/mod.rs")));
/// assert!(!is_rust(Path::new("/src/Cargo.toml")));
/// ```
pub fn glob_matcher(pattern: &str) -> Result<impl Fn(&Path) -> bool> {
    let compiled = Pattern::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;
    let base_name_only = !pattern.contains('/');

    Ok(move |path: &Path| {
        let subject = if base_name_only {
            path.file_name().unwrap_or(path.as_os_str())
        } else {
            path.as_os_str()
        };
        compiled.matches_with(&subject.to_string_lossy(), GLOB_OPTIONS)
    })
}

/// Build a regular-expression matcher over the path text.
///
/// The expression is searched for anywhere in the path; anchor it with `^`
/// or `$` as needed.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`] if the expression does not compile.
///
/// # Examples
///
/// ```
/// use pathsift::predicate::regex_matcher;
/// use std::path::Path;
///
/// let is_test = regex_matcher(r"_test\.go$").unwrap();
/// assert!(is_test(Path::new("pkg/server_test.go")));
/// assert!(!is_test(Path::new("pkg/server.go")));
/// ```
pub fn regex_matcher(pattern: &str) -> Result<impl Fn(&Path) -> bool> {
    let compiled = Regex::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })?;

    Ok(move |path: &Path| compiled.is_match(&path.to_string_lossy()))
}

/// Build an exact, case-sensitive extension matcher.
///
/// The extension is whatever follows the last `.` of the file name, without
/// the dot. Files with no extension (including dotfiles like `.bashrc`) have
/// the empty extension.
///
/// # Examples
///
/// ```
/// use pathsift::predicate::ext_matcher;
/// use std::path::Path;
///
/// let is_json = ext_matcher("json");
/// assert!(is_json(Path::new("config.json")));
/// assert!(!is_json(Path::new("config.JSON")));
/// ```
pub fn ext_matcher(extension: &str) -> impl Fn(&Path) -> bool {
    let extension = extension.to_string();
    move |path: &Path| path.extension().unwrap_or_default() == OsStr::new(&extension)
}

/// Build a size matcher from an expression such as `>1MB`.
///
/// # Errors
///
/// Building fails with [`Error::InvalidExpression`]; calling the predicate
/// propagates stat failures.
///
/// # Examples
///
/// ```no_run
/// use pathsift::predicate::size_matcher;
/// use std::path::Path;
///
/// let large = size_matcher(">10MB").unwrap();
/// let is_large = large(Path::new("video.mp4")).unwrap();
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn size_matcher(expression: &str) -> Result<impl Fn(&Path) -> Result<bool>> {
    let comparison = Comparison::parse(expression, UnitKind::Size)?;

    Ok(move |path: &Path| Ok(comparison.matches(get_stats(path)?.size as f64)))
}

/// Build a matcher on the age of a file timestamp.
///
/// The expression is compared against how long ago the timestamp was, so
/// `<7d` keeps files touched within the last week and `>30d` keeps files
/// left alone for a month.
///
/// # Errors
///
/// Building fails with [`Error::InvalidExpression`]. Calling the predicate
/// propagates stat failures, and reports [`Error::Io`] if the platform does
/// not record access times.
pub fn time_matcher(field: TimeField, expression: &str) -> Result<impl Fn(&Path) -> Result<bool>> {
    let comparison = Comparison::parse(expression, UnitKind::Age)?;

    Ok(move |path: &Path| {
        let stats = get_stats(path)?;
        let timestamp = match field {
            TimeField::Modified => stats.modified,
            TimeField::Accessed => stats.accessed.ok_or_else(|| {
                Error::Io(io::Error::new(
                    io::ErrorKind::Unsupported,
                    format!("access time unavailable for {}", path.display()),
                ))
            })?,
        };
        Ok(comparison.matches(age_seconds(timestamp)))
    })
}

fn segments(path: &Path) -> Vec<String> {
    path.to_string_lossy()
        .split(MAIN_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Returns `true` unless the final path segment starts with a dot.
///
/// Segments are taken from the path text split on the platform separator,
/// so `.` and `..` count as hidden and a trailing separator leaves an empty,
/// visible last segment.
///
/// # Examples
///
/// ```
/// use pathsift::predicate::is_visible_file;
/// use std::path::Path;
///
/// assert!(!is_visible_file(Path::new("/home/user/.bashrc")));
/// assert!(is_visible_file(Path::new("/home/user/notes.txt")));
/// assert!(!is_visible_file(Path::new("..")));
/// ```
#[must_use]
pub fn is_visible_file(path: &Path) -> bool {
    segments(path)
        .last()
        .map_or(true, |segment| !segment.starts_with('.'))
}

/// Returns `true` if any segment of the path starts with a dot.
///
/// # Examples
///
/// ```
/// use pathsift::predicate::has_hidden_segment;
/// use std::path::Path;
///
/// assert!(has_hidden_segment(Path::new("/repo/.git/config")));
/// assert!(has_hidden_segment(Path::new("../sibling/lib.rs")));
/// assert!(!has_hidden_segment(Path::new("/repo/src/lib.rs")));
/// ```
#[must_use]
pub fn has_hidden_segment(path: &Path) -> bool {
    segments(path)
        .iter()
        .any(|segment| segment.starts_with('.'))
}
