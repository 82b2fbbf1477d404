//! Path relationship checking.
//!
//! This module answers "is this directory underneath that one" purely from the
//! path text, without touching the filesystem. Both paths must use the same
//! convention (both absolute, or both relative to the same base).

use std::path::{Path, MAIN_SEPARATOR};

/// Number of segments obtained by splitting `path` on the platform separator.
///
/// The split is taken literally, so empty segments count: `""` has depth 1,
/// `"/"` has depth 2 (an empty segment either side of the separator), and
/// `"/a/b"` has depth 3.
///
/// # Examples
///
/// ```
/// use pathsift::path::path_depth;
/// use std::path::Path;
///
/// assert_eq!(path_depth(Path::new("")), 1);
/// assert_eq!(path_depth(Path::new("a")), 1);
/// assert_eq!(path_depth(Path::new("a/b/c")), 3);
/// ```
#[must_use]
pub fn path_depth(path: &Path) -> usize {
    path.to_string_lossy().split(MAIN_SEPARATOR).count()
}

/// Returns `true` if `base` is a strict ancestor of `candidate`.
///
/// Walks upward from the parent of `candidate`, comparing each step against
/// `base`. The walk stops, without comparing, at a value that has no parent:
/// the filesystem root, `.`, or the start of a relative path. So neither `/`
/// nor `.` is ever reported as an ancestor, and a path is never its own
/// subdirectory.
///
/// Comparison is component-wise, so `/a/` and `/a` are the same directory.
///
/// # Examples
///
/// ```
/// use pathsift::path::is_sub_directory;
/// use std::path::Path;
///
/// assert!(is_sub_directory(Path::new("/a"), Path::new("/a/b/c")));
/// assert!(!is_sub_directory(Path::new("/a/b"), Path::new("/a")));
/// assert!(!is_sub_directory(Path::new("/a"), Path::new("/a")));
/// ```
#[must_use]
pub fn is_sub_directory(base: &Path, candidate: &Path) -> bool {
    let mut current = candidate.parent();
    while let Some(dir) = current {
        if !has_parent(dir) {
            break;
        }
        if dir == base {
            return true;
        }
        current = dir.parent();
    }
    false
}

fn has_parent(dir: &Path) -> bool {
    dir.parent().is_some() && dir != Path::new(".")
}

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathsift::path::PathRelationship;
/// use std::path::Path;
///
/// assert_eq!(
///     PathRelationship::between(Path::new("/srv"), Path::new("/srv/www")),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a strict ancestor of the second.
    Ancestor,

    /// The first path is a strict descendant of the second.
    Descendant,

    /// Both paths name the same location.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("/b"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        if path1 == path2 {
            Self::Same
        } else if is_sub_directory(path1, path2) {
            Self::Ancestor
        } else if is_sub_directory(path2, path1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Returns `true` for `Ancestor`, `Descendant`, or `Same`.
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        !matches!(self, Self::Unrelated)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathsift::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let desc = PathRelationship::Ancestor.description(Path::new("/a"), Path::new("/a/b"));
    /// assert!(desc.contains("ancestor"));
    /// ```
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        let (a, b) = (path1.display(), path2.display());
        match self {
            Self::Ancestor => format!("{a} is an ancestor of {b}"),
            Self::Descendant => format!("{a} is a descendant of {b}"),
            Self::Same => format!("{a} and {b} are the same path"),
            Self::Unrelated => format!("{a} and {b} are unrelated paths"),
        }
    }
}
