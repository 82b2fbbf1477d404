//! Walking reduced search roots.
//!
//! A [`Finder`] normalizes its roots, collapses overlapping ones with
//! [`reduce_paths`], and walks each remaining root depth-first, reporting
//! every entry its [`FileFilter`] accepts. Sibling entries are visited in
//! byte order of their names; a directory's own entries are reported before
//! the contents of its subdirectories.
//!
//! Symlinks are reported like files but never descended into. Dangling
//! symlinks are skipped; any other failure to follow one is an error.

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{ConfigValidator, SearchConfig};
use crate::error::{Error, Result};
use crate::filter::FileFilter;
use crate::fs::{join_with, AsyncLister, BlockingLister, DirectoryLister};
use crate::path::normalize::normalize;
use crate::path::reduce_paths;
use crate::predicate::is_visible_file;

/// Finds files beneath a set of roots.
///
/// # Examples
///
/// ```
/// use pathsift::config::SearchConfig;
/// use pathsift::Finder;
/// use std::fs;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::create_dir(dir.path().join("src")).unwrap();
/// fs::write(dir.path().join("src/lib.rs"), "").unwrap();
/// fs::write(dir.path().join("README.md"), "").unwrap();
///
/// let finder = Finder::new(&SearchConfig {
///     // The nested root is redundant and is reduced away.
///     roots: vec![dir.path().to_path_buf(), dir.path().join("src")],
///     extension: Some("rs".into()),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let found = finder.find().unwrap();
/// assert_eq!(found.len(), 1);
/// assert!(found[0].ends_with("src/lib.rs"));
/// ```
#[derive(Debug)]
pub struct Finder {
    roots: Vec<PathBuf>,
    filter: FileFilter,
    include_hidden: bool,
    include_directories: bool,
    max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    File,
    Symlink,
}

impl EntryKind {
    fn of(metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else {
            Self::File
        }
    }
}

impl Finder {
    /// Build a finder from a validated configuration.
    ///
    /// An empty `roots` list searches the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the configuration is invalid.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        ConfigValidator::validate(config)?;

        let roots = if config.roots.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            config.roots.clone()
        };

        Ok(Self {
            roots,
            filter: FileFilter::from_config(config)?,
            include_hidden: config.include_hidden(),
            include_directories: config.include_directories(),
            max_depth: config.max_depth,
        })
    }

    /// Build a finder from roots and a ready-made filter.
    #[must_use]
    pub fn with_filter(roots: Vec<PathBuf>, filter: FileFilter) -> Self {
        Self {
            roots,
            filter,
            include_hidden: false,
            include_directories: false,
            max_depth: None,
        }
    }

    /// Descend into and report dot-prefixed entries.
    #[must_use]
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    /// Report accepted directories as well as files.
    #[must_use]
    pub fn include_directories(mut self, include: bool) -> Self {
        self.include_directories = include;
        self
    }

    /// Limit how far below each root the walk goes.
    #[must_use]
    pub fn max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// The normalized, reduced roots that will actually be walked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if a root cannot be normalized.
    pub fn roots(&self) -> Result<Vec<PathBuf>> {
        let normalized = self
            .roots
            .iter()
            .map(|root| normalize(root))
            .collect::<Result<Vec<_>>>()?;
        let mut reduced = reduce_paths(&normalized);
        // Reduction keeps identical roots; walking one twice would repeat results.
        reduced.dedup();

        // Reduction never treats a filesystem root as an ancestor.
        let tops: Vec<PathBuf> = reduced
            .iter()
            .filter(|root| root.parent().is_none())
            .cloned()
            .collect();
        reduced.retain(|root| tops.iter().all(|top| root == top || !root.starts_with(top)));
        Ok(reduced)
    }

    /// Walk every root on the calling thread.
    ///
    /// # Errors
    ///
    /// Propagates listing and stat failures, including
    /// [`Error::PathNotFound`] for a missing root.
    pub fn find(&self) -> Result<Vec<PathBuf>> {
        let mut walk = Walk::new(self);

        for root in self.roots()? {
            let metadata = std::fs::metadata(&root).map_err(|e| Error::from_io(&root, e))?;
            walk.start(root, metadata.is_dir())?;

            while let Some((dir, depth)) = walk.next_dir() {
                let names = BlockingLister.list_dir(&dir)?;
                let join = join_with(&dir);
                for name in &names {
                    let path = join(name);
                    let metadata = std::fs::symlink_metadata(&path)
                        .map_err(|e| Error::from_io(&path, e))?;
                    let kind = EntryKind::of(&metadata);
                    let dangling = kind == EntryKind::Symlink
                        && target_missing(&path, std::fs::metadata(&path))?;
                    walk.visit(path, depth + 1, kind, dangling)?;
                }
            }
        }

        Ok(walk.finish())
    }

    /// Walk every root through `tokio::fs`, one directory at a time.
    ///
    /// Must be awaited inside a Tokio runtime. Visits entries in the same
    /// order as [`find`](Self::find).
    ///
    /// # Errors
    ///
    /// Same as [`find`](Self::find).
    pub async fn find_async(&self) -> Result<Vec<PathBuf>> {
        let mut walk = Walk::new(self);

        for root in self.roots()? {
            let metadata = tokio::fs::metadata(&root)
                .await
                .map_err(|e| Error::from_io(&root, e))?;
            walk.start(root, metadata.is_dir())?;

            while let Some((dir, depth)) = walk.next_dir() {
                let names = AsyncLister.list_dir(&dir).await?;
                for name in &names {
                    let path = dir.join(name);
                    let metadata = tokio::fs::symlink_metadata(&path)
                        .await
                        .map_err(|e| Error::from_io(&path, e))?;
                    let kind = EntryKind::of(&metadata);
                    let dangling = kind == EntryKind::Symlink
                        && target_missing(&path, tokio::fs::metadata(&path).await)?;
                    walk.visit(path, depth + 1, kind, dangling)?;
                }
            }
        }

        Ok(walk.finish())
    }
}

/// Whether a symlink's target is missing, given the result of following it.
fn target_missing(link: &Path, followed: io::Result<Metadata>) -> Result<bool> {
    match followed {
        Ok(_) => Ok(false),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(err) => Err(Error::from_io(link, err)),
    }
}

/// Walk state shared by the blocking and async drivers.
struct Walk<'a> {
    finder: &'a Finder,
    found: Vec<PathBuf>,
    pending: Vec<(PathBuf, usize)>,
    // Subdirectories of the directory being listed, queued in listing order.
    queued: Vec<(PathBuf, usize)>,
}

impl<'a> Walk<'a> {
    fn new(finder: &'a Finder) -> Self {
        Self {
            finder,
            found: Vec::new(),
            pending: Vec::new(),
            queued: Vec::new(),
        }
    }

    /// Begin a root. Roots are explicit, so hidden roots are walked anyway.
    fn start(&mut self, root: PathBuf, is_dir: bool) -> Result<()> {
        log::debug!("searching {}", root.display());
        if is_dir {
            self.pending.push((root, 0));
        } else if self.finder.filter.matches(&root)? {
            self.found.push(root);
        }
        Ok(())
    }

    /// Next directory to list, if its children are within the depth limit.
    fn next_dir(&mut self) -> Option<(PathBuf, usize)> {
        // Queue the previous directory's subdirectories so the first listed is next.
        self.pending.extend(self.queued.drain(..).rev());
        while let Some((dir, depth)) = self.pending.pop() {
            if self.finder.max_depth.map_or(true, |max| depth < max) {
                return Some((dir, depth));
            }
        }
        None
    }

    fn visit(&mut self, path: PathBuf, depth: usize, kind: EntryKind, dangling: bool) -> Result<()> {
        if !self.finder.include_hidden && !is_visible_file(&path) {
            return Ok(());
        }

        match kind {
            EntryKind::Directory => {
                if self.finder.include_directories && self.finder.filter.matches(&path)? {
                    self.found.push(path.clone());
                }
                self.queued.push((path, depth));
            }
            EntryKind::Symlink if dangling => {
                log::debug!("skipping dangling symlink {}", path.display());
            }
            EntryKind::File | EntryKind::Symlink => {
                if self.finder.filter.matches(&path)? {
                    self.found.push(path);
                }
            }
        }
        Ok(())
    }

    fn finish(self) -> Vec<PathBuf> {
        log::debug!("found {} matching path(s)", self.found.len());
        self.found
    }
}

/// Convenience wrapper: build a [`Finder`] from `config` and run it.
///
/// # Errors
///
/// Propagates configuration and walk errors.
pub fn find(config: &SearchConfig) -> Result<Vec<PathBuf>> {
    Finder::new(config)?.find()
}
