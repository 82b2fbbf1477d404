//! Configuration for searches.
//!
//! A [`SearchConfig`] names the roots to search and the filters to apply. It
//! can be written by hand, read from YAML files, or overridden through
//! `PATHSIFT_*` environment variables.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHSIFT_*`)
//! 3. Local project config (`pathsift.local.yaml`)
//! 4. Project config (`pathsift.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathsift::config::ConfigLoader;
//!
//! let config = ConfigLoader::parse(
//!     "roots: [/var/log]\nextension: log\nmodified: '<1d'\n",
//! )
//! .unwrap();
//! assert_eq!(config.extension.as_deref(), Some("log"));
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use schema::SearchConfig;
pub use validator::ConfigValidator;
