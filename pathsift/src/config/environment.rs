//! Environment variable handling for configuration overrides.
//!
//! `PATHSIFT_*` variables override whatever the configuration files set.

use std::env;

use crate::config::schema::SearchConfig;
use crate::error::{Error, Result};

/// Platform path list (`:` on Unix, `;` on Windows) replacing `roots`.
pub const ROOTS_ENV: &str = "PATHSIFT_ROOTS";
/// Boolean overriding `include_hidden`.
pub const INCLUDE_HIDDEN_ENV: &str = "PATHSIFT_INCLUDE_HIDDEN";
/// Boolean overriding `include_directories`.
pub const INCLUDE_DIRECTORIES_ENV: &str = "PATHSIFT_INCLUDE_DIRECTORIES";
/// Non-negative integer overriding `max_depth`.
pub const MAX_DEPTH_ENV: &str = "PATHSIFT_MAX_DEPTH";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathsift::config::{EnvironmentConfig, SearchConfig};
///
/// let mut config = SearchConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHSIFT_*` overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unparseable value.
    pub fn apply_overrides(config: &mut SearchConfig) -> Result<()> {
        if let Some(roots) = env::var_os(ROOTS_ENV) {
            let roots: Vec<_> = env::split_paths(&roots)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !roots.is_empty() {
                config.roots = roots;
            }
        }

        if let Ok(val) = env::var(INCLUDE_HIDDEN_ENV) {
            config.include_hidden = Some(Self::parse_bool(INCLUDE_HIDDEN_ENV, &val)?);
        }

        if let Ok(val) = env::var(INCLUDE_DIRECTORIES_ENV) {
            config.include_directories = Some(Self::parse_bool(INCLUDE_DIRECTORIES_ENV, &val)?);
        }

        if let Ok(depth) = env::var(MAX_DEPTH_ENV) {
            config.max_depth = Some(depth.trim().parse().map_err(|_| Error::Validation {
                field: MAX_DEPTH_ENV.into(),
                message: "Must be a non-negative integer".into(),
            })?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"),
            }),
        }
    }
}
