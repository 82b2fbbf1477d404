//! Configuration validation.
//!
//! Validation compiles every pattern and comparison once, so a typo in a
//! configuration file is reported before any directory is read.

use crate::config::schema::SearchConfig;
use crate::error::{Error, Result};
use crate::filter::FileFilter;

/// Validates a [`SearchConfig`].
///
/// # Examples
///
/// ```
/// use pathsift::config::{ConfigValidator, SearchConfig};
///
/// ConfigValidator::validate(&SearchConfig::default()).unwrap();
///
/// let bad = SearchConfig {
///     size: Some("bigger than a breadbox".into()),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the offending field.
    pub fn validate(config: &SearchConfig) -> Result<()> {
        for (index, root) in config.roots.iter().enumerate() {
            if root.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: format!("roots[{index}]"),
                    message: "root must not be empty".into(),
                });
            }
        }

        if let Some(bare) = config.extension.as_deref().and_then(|e| e.strip_prefix('.')) {
            return Err(Error::Validation {
                field: "extension".into(),
                message: format!("give the extension without the leading dot: '{bare}'"),
            });
        }

        FileFilter::from_config(config).map(|_| ())
    }
}
