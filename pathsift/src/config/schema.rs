//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A search: where to look and what to keep.
///
/// Every filter field is optional; a search with no filters keeps every
/// visible file under its roots.
///
/// # Examples
///
/// ```
/// use pathsift::config::SearchConfig;
///
/// let config: SearchConfig = serde_yaml::from_str(
///     "roots: [/srv/www, /srv/www/static]\nname_glob: '*.html'\nsize: '>4k'\n",
/// )
/// .unwrap();
/// assert_eq!(config.roots.len(), 2);
/// assert_eq!(config.name_glob.as_deref(), Some("*.html"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Directories to search. Overlapping roots are reduced before walking;
    /// an empty list means the current directory.
    #[serde(default)]
    pub roots: Vec<PathBuf>,

    /// Shell glob matched against file names (or whole paths if it has a `/`).
    pub name_glob: Option<String>,

    /// Regular expression searched for in the path.
    pub name_regex: Option<String>,

    /// Exact extension, without the leading dot.
    pub extension: Option<String>,

    /// Size comparison, e.g. `>1MB`.
    pub size: Option<String>,

    /// Modification-age comparison, e.g. `<7d`.
    pub modified: Option<String>,

    /// Access-age comparison, e.g. `>30d`.
    pub accessed: Option<String>,

    /// Descend into and report dot-prefixed entries.
    pub include_hidden: Option<bool>,

    /// Report matching directories as well as files.
    pub include_directories: Option<bool>,

    /// Maximum depth below each root (a root's direct children are depth 1).
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Overlay `other` on top of `self`.
    ///
    /// Set fields in `other` win; a non-empty `roots` list replaces ours.
    pub fn merge(&mut self, other: SearchConfig) {
        if !other.roots.is_empty() {
            self.roots = other.roots;
        }
        merge_field(&mut self.name_glob, other.name_glob);
        merge_field(&mut self.name_regex, other.name_regex);
        merge_field(&mut self.extension, other.extension);
        merge_field(&mut self.size, other.size);
        merge_field(&mut self.modified, other.modified);
        merge_field(&mut self.accessed, other.accessed);
        merge_field(&mut self.include_hidden, other.include_hidden);
        merge_field(&mut self.include_directories, other.include_directories);
        merge_field(&mut self.max_depth, other.max_depth);
    }

    /// Whether hidden entries are searched. Defaults to `false`.
    #[must_use]
    pub fn include_hidden(&self) -> bool {
        self.include_hidden.unwrap_or(false)
    }

    /// Whether directories are reported. Defaults to `false`.
    #[must_use]
    pub fn include_directories(&self) -> bool {
        self.include_directories.unwrap_or(false)
    }
}

fn merge_field<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
