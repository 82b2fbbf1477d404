//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::SearchConfig;
use crate::error::{Error, Result};

/// Name of the shared configuration file.
pub const CONFIG_FILE: &str = "pathsift.yaml";

/// Name of the uncommitted, machine-local override file.
pub const LOCAL_CONFIG_FILE: &str = "pathsift.local.yaml";

/// A configuration file together with its precedence.
///
/// Higher precedence values override lower ones when merged.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: SearchConfig,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use pathsift::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::discover(Path::new(".")).unwrap();
/// println!("Found {} configuration files", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the nearest `pathsift.yaml` / `pathsift.local.yaml` pair.
    ///
    /// Walks up from `start_dir` and stops at the first directory holding
    /// either file. Sources come back sorted by precedence, lowest first.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut current = Some(start_dir);

        while let Some(dir) = current {
            let mut sources = Vec::new();
            for (name, precedence) in [(CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
                let candidate = dir.join(name);
                if candidate.is_file() {
                    log::debug!("loading configuration from {}", candidate.display());
                    sources.push(ConfigSource {
                        config: Self::load_file(&candidate)?,
                        path: candidate,
                        precedence,
                    });
                }
            }

            if !sources.is_empty() {
                return Ok(sources);
            }
            current = dir.parent();
        }

        Ok(Vec::new())
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] / [`Error::PermissionDenied`] if the
    /// file cannot be read, and [`Error::Configuration`] for invalid YAML.
    pub fn load_file(path: &Path) -> Result<SearchConfig> {
        let contents = fs::read_to_string(path).map_err(|e| Error::from_io(path, e))?;
        Self::parse(&contents)
    }

    /// Parse configuration from YAML text.
    ///
    /// An empty document yields the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] for invalid YAML or unknown fields.
    pub fn parse(contents: &str) -> Result<SearchConfig> {
        if contents.trim().is_empty() {
            return Ok(SearchConfig::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }
}
