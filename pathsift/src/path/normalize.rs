//! Lexical normalization of search roots.
//!
//! [`reduce_paths`](super::reduce_paths) compares path text, so roots given
//! as `~/src`, `./src` and `/home/me/src/../src` must be brought to one
//! absolute spelling before reduction. Nothing here touches the filesystem
//! except reading the current directory; symlinks are left alone.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading `~` or `~/` to the home directory.
///
/// `~user` is rejected; other paths come back unchanged.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if the path is not valid UTF-8, the home
/// directory is unknown, or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use pathsift::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/notes")).unwrap();
/// assert!(expanded.ends_with("notes"));
/// assert_eq!(expand_tilde(Path::new("/srv")).unwrap(), Path::new("/srv"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let text = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    let Some(rest) = text.strip_prefix('~') else {
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else if let Some(tail) = rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
        Ok(home.join(tail))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported".to_string(),
        })
    }
}

/// Drop `.` components and fold `..` into the preceding component.
///
/// # Errors
///
/// Returns [`Error::InvalidPath`] if `..` would climb above the start of
/// the path.
///
/// # Examples
///
/// ```
/// use pathsift::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                resolved.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                let at_root = resolved.parent().is_none();
                if at_root || !resolved.pop() {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "too many '..' components".to_string(),
                    });
                }
            }
        }
    }

    Ok(resolved)
}

/// Bring a search root to absolute, tilde-free, dot-free form.
///
/// # Errors
///
/// Propagates failures from [`expand_tilde`] and [`resolve_components`],
/// and reports an unreadable current directory as [`Error::InvalidPath`].
///
/// # Examples
///
/// ```
/// use pathsift::path::normalize::normalize;
/// use std::path::Path;
///
/// let root = normalize(Path::new("./src")).unwrap();
/// assert!(root.is_absolute());
/// assert!(root.ends_with("src"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("cannot read current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}
