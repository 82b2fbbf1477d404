//! A conjunction of predicates applied to each candidate file.

use std::fmt;
use std::path::Path;

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::predicate::{
    ext_matcher, glob_matcher, regex_matcher, size_matcher, time_matcher, TimeField,
};

type NamePredicate = Box<dyn Fn(&Path) -> bool + Send + Sync>;
type StatPredicate = Box<dyn Fn(&Path) -> Result<bool> + Send + Sync>;

/// Keeps a path only if every configured predicate accepts it.
///
/// Name predicates run first; the metadata predicates, which stat the file,
/// only run for paths that passed them.
///
/// # Examples
///
/// ```
/// use pathsift::FileFilter;
/// use std::path::Path;
///
/// let filter = FileFilter::new()
///     .with_glob("report-*")
///     .unwrap()
///     .with_extension("csv");
///
/// assert!(filter.matches(Path::new("/data/report-07.csv")).unwrap());
/// assert!(!filter.matches(Path::new("/data/report-07.tsv")).unwrap());
/// ```
#[derive(Default)]
pub struct FileFilter {
    name_predicates: Vec<(String, NamePredicate)>,
    stat_predicates: Vec<(String, StatPredicate)>,
}

impl FileFilter {
    /// A filter that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the filter described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first field whose pattern or
    /// expression does not compile.
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let mut filter = Self::new();

        if let Some(ref pattern) = config.name_glob {
            filter = filter.with_glob(pattern).map_err(in_field("name_glob"))?;
        }
        if let Some(ref pattern) = config.name_regex {
            filter = filter.with_regex(pattern).map_err(in_field("name_regex"))?;
        }
        if let Some(ref extension) = config.extension {
            filter = filter.with_extension(extension);
        }
        if let Some(ref expression) = config.size {
            filter = filter.with_size(expression).map_err(in_field("size"))?;
        }
        if let Some(ref expression) = config.modified {
            filter = filter
                .with_time(TimeField::Modified, expression)
                .map_err(in_field("modified"))?;
        }
        if let Some(ref expression) = config.accessed {
            filter = filter
                .with_time(TimeField::Accessed, expression)
                .map_err(in_field("accessed"))?;
        }

        Ok(filter)
    }

    /// Require the name to match a shell glob.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the glob does not compile.
    pub fn with_glob(mut self, pattern: &str) -> Result<Self> {
        let predicate = glob_matcher(pattern)?;
        self.name_predicates
            .push((format!("glob {pattern}"), Box::new(predicate)));
        Ok(self)
    }

    /// Require the path to contain a regex match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] if the expression does not compile.
    pub fn with_regex(mut self, pattern: &str) -> Result<Self> {
        let predicate = regex_matcher(pattern)?;
        self.name_predicates
            .push((format!("regex {pattern}"), Box::new(predicate)));
        Ok(self)
    }

    /// Require an exact extension.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.name_predicates.push((
            format!("extension {extension}"),
            Box::new(ext_matcher(extension)),
        ));
        self
    }

    /// Require the size to satisfy `expression`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExpression`] if the expression does not parse.
    pub fn with_size(mut self, expression: &str) -> Result<Self> {
        let predicate = size_matcher(expression)?;
        self.stat_predicates
            .push((format!("size {expression}"), Box::new(predicate)));
        Ok(self)
    }

    /// Require the age of a timestamp to satisfy `expression`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidExpression`] if the expression does not parse.
    pub fn with_time(mut self, field: TimeField, expression: &str) -> Result<Self> {
        let predicate = time_matcher(field, expression)?;
        let label = match field {
            TimeField::Modified => format!("modified {expression}"),
            TimeField::Accessed => format!("accessed {expression}"),
        };
        self.stat_predicates.push((label, Box::new(predicate)));
        Ok(self)
    }

    /// Returns `true` if no predicates are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name_predicates.is_empty() && self.stat_predicates.is_empty()
    }

    /// Returns `true` if any predicate needs file metadata.
    #[must_use]
    pub fn needs_metadata(&self) -> bool {
        !self.stat_predicates.is_empty()
    }

    /// Test `path` against every predicate.
    ///
    /// # Errors
    ///
    /// Propagates stat failures from size and time predicates.
    pub fn matches(&self, path: &Path) -> Result<bool> {
        if !self.name_predicates.iter().all(|(_, p)| p(path)) {
            return Ok(false);
        }
        for (label, predicate) in &self.stat_predicates {
            if !predicate(path)? {
                log::trace!("{} rejected by {label}", path.display());
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Debug for FileFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self
            .name_predicates
            .iter()
            .map(|(label, _)| label.as_str())
            .chain(self.stat_predicates.iter().map(|(label, _)| label.as_str()))
            .collect();
        f.debug_struct("FileFilter")
            .field("predicates", &labels)
            .finish()
    }
}

fn in_field(field: &'static str) -> impl Fn(Error) -> Error {
    move |err| Error::Validation {
        field: field.to_string(),
        message: err.to_string(),
    }
}
