//! Error types for the pathsift library.
//!
//! Pure path functions never fail. Everything that touches the filesystem,
//! parses a pattern, or loads configuration reports through [`Error`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a pathsift error.
///
/// # Examples
///
/// ```
/// use pathsift::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(1024)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathsift library.
#[derive(Debug, Error)]
pub enum Error {
    /// A comparison expression such as `>1MB` could not be parsed.
    #[error("invalid expression '{expression}': {reason}")]
    InvalidExpression {
        /// The expression as supplied.
        expression: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A glob or regular expression pattern could not be compiled.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// The compiler's complaint.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Classify an I/O error raised while accessing `path`.
    ///
    /// Missing paths and permission failures get their own variants so that
    /// callers can match on them; everything else is kept as [`Error::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(
    ///     Path::new("/missing"),
    ///     io::Error::new(io::ErrorKind::NotFound, "gone"),
    /// );
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PathNotFound { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
