//! Search-path reduction.
//!
//! When a caller hands over overlapping search roots such as `/a` and `/a/b`,
//! walking both visits `/a/b` twice. [`reduce_paths`] collapses the list to the
//! roots that are not underneath any other root, which covers the same files.

use std::path::{Path, PathBuf};

use super::relationship::is_sub_directory;

/// Every path in `paths` that has an ancestor elsewhere in `paths`.
///
/// The result is flattened but not deduplicated: a path appears once per
/// ancestor it has in the list. Identical entries never count as ancestors of
/// each other. This is an O(n²) scan; search-root lists are small.
///
/// # Examples
///
/// ```
/// use pathsift::path::find_sub_directories;
/// use std::path::PathBuf;
///
/// let subs = find_sub_directories(&["/a", "/a/b", "/a/b/c"]);
/// assert_eq!(
///     subs,
///     vec![
///         PathBuf::from("/a/b"),
///         PathBuf::from("/a/b/c"),
///         PathBuf::from("/a/b/c"),
///     ]
/// );
/// ```
#[must_use]
pub fn find_sub_directories<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    paths
        .iter()
        .flat_map(|base| {
            let base: &Path = base.as_ref();
            paths.iter().filter_map(move |candidate| {
                let candidate: &Path = candidate.as_ref();
                (candidate != base && is_sub_directory(base, candidate))
                    .then(|| candidate.to_path_buf())
            })
        })
        .collect()
}

/// Predicate that keeps paths absent from `sub_dirs`.
///
/// # Examples
///
/// ```
/// use pathsift::path::not_sub_directory;
/// use std::path::{Path, PathBuf};
///
/// let subs = vec![PathBuf::from("/a/b")];
/// let keep = not_sub_directory(&subs);
/// assert!(keep(Path::new("/a")));
/// assert!(!keep(Path::new("/a/b")));
/// ```
pub fn not_sub_directory(sub_dirs: &[PathBuf]) -> impl Fn(&Path) -> bool + '_ {
    move |path| !sub_dirs.iter().any(|sub| sub == path)
}

/// Reduce `search_paths` to the minimal set of roots covering the same files.
///
/// The input is sorted lexicographically (byte order of the path text), every
/// path that has an ancestor in the list is dropped, and the survivors are
/// returned in sorted order. A single-element input is returned unchanged.
///
/// Identical duplicates are not ancestors of each other, so they both survive.
/// Strings that are not meaningful paths simply never match and are kept.
///
/// # Examples
///
/// ```
/// use pathsift::path::reduce_paths;
/// use std::path::PathBuf;
///
/// assert_eq!(
///     reduce_paths(&["/c", "/a/b", "/a"]),
///     vec![PathBuf::from("/a"), PathBuf::from("/c")]
/// );
/// assert_eq!(reduce_paths(&["/a/b", "/a"]), vec![PathBuf::from("/a")]);
/// ```
#[must_use]
pub fn reduce_paths<P: AsRef<Path>>(search_paths: &[P]) -> Vec<PathBuf> {
    if let [only] = search_paths {
        return vec![only.as_ref().to_path_buf()];
    }

    let mut sorted: Vec<PathBuf> = search_paths
        .iter()
        .map(|p| p.as_ref().to_path_buf())
        .collect();
    sorted.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    let sub_dirs = find_sub_directories(&sorted);
    let keep = not_sub_directory(&sub_dirs);
    let reduced: Vec<PathBuf> = sorted.iter().filter(|p| keep(p.as_path())).cloned().collect();

    log::debug!(
        "reduced {} search path(s) to {} root(s)",
        search_paths.len(),
        reduced.len()
    );
    reduced
}
