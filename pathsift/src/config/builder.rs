//! Assembles a [`SearchConfig`] from files, environment, and code.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::SearchConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a validated configuration.
///
/// Sources are applied lowest precedence first: defaults, `pathsift.yaml`,
/// `pathsift.local.yaml`, `PATHSIFT_*` variables, then [`with_config`].
///
/// [`with_config`]: ConfigBuilder::with_config
///
/// # Examples
///
/// ```
/// use pathsift::config::{ConfigBuilder, SearchConfig};
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(SearchConfig {
///         roots: vec![PathBuf::from("/srv")],
///         extension: Some("log".into()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.extension.as_deref(), Some("log"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<SearchConfig>,
}

impl ConfigBuilder {
    /// Create a builder that reads files from the current directory upward.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuration discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `PATHSIFT_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Overlay `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is malformed, or the merged configuration fails validation.
    pub fn build(self) -> Result<SearchConfig> {
        let mut config = SearchConfig::default();

        if !self.skip_files {
            let start = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            for source in ConfigLoader::discover(&start)? {
                config.merge(source.config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config.merge(overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
