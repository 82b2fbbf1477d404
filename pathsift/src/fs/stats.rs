//! File metadata.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The metadata the predicates need, detached from the platform type.
///
/// # Examples
///
/// ```no_run
/// use pathsift::fs::get_stats;
/// use std::path::Path;
///
/// let stats = get_stats(Path::new("Cargo.toml")).unwrap();
/// assert!(!stats.is_directory);
/// println!("{} bytes, modified {}", stats.size, stats.modified);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Length in bytes.
    pub size: u64,
    /// Whether the path is a directory.
    pub is_directory: bool,
    /// Last modification time.
    pub modified: DateTime<Utc>,
    /// Last access time, when the platform records one.
    pub accessed: Option<DateTime<Utc>>,
}

impl FileStats {
    /// Build from platform metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the platform cannot report a modification time.
    pub fn from_metadata(metadata: &fs::Metadata) -> Result<Self> {
        Ok(Self {
            size: metadata.len(),
            is_directory: metadata.is_dir(),
            modified: metadata.modified().map(DateTime::<Utc>::from)?,
            accessed: metadata.accessed().ok().map(DateTime::<Utc>::from),
        })
    }
}

/// Read metadata for `path`, following symlinks.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] or [`Error::PermissionDenied`] when the
/// path is missing or unreadable, and [`Error::Io`] for anything else.
pub fn get_stats(path: &Path) -> Result<FileStats> {
    let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
    log::trace!("stat {}: {} bytes", path.display(), metadata.len());
    FileStats::from_metadata(&metadata)
}

/// Returns `true` if `path` is a directory.
///
/// # Errors
///
/// Propagates errors from [`get_stats`].
pub fn is_directory(path: &Path) -> Result<bool> {
    Ok(get_stats(path)?.is_directory)
}

/// Seconds elapsed between `then` and now; negative for future timestamps.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn age_seconds(then: DateTime<Utc>) -> f64 {
    let elapsed = Utc::now().signed_duration_since(then);
    elapsed.num_milliseconds() as f64 / 1000.0
}
