//! Directory listing behind one capability with a blocking and an async
//! implementation.
//!
//! Callers pick the implementation that fits their concurrency model:
//! [`BlockingLister`] returns the listing directly, [`AsyncLister`] returns a
//! future that resolves once the underlying read completes. Both yield child
//! names sorted by byte order so that walks are deterministic.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, FutureExt};

use crate::error::{Error, Result};

/// Lists the names of a directory's children.
///
/// # Examples
///
/// ```
/// use pathsift::fs::{BlockingLister, DirectoryLister};
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("b.txt"), "").unwrap();
/// std::fs::write(dir.path().join("a.txt"), "").unwrap();
///
/// let names = BlockingLister.list_dir(dir.path()).unwrap();
/// assert_eq!(names, vec!["a.txt", "b.txt"]);
/// ```
pub trait DirectoryLister {
    /// What a listing call hands back: a result, or a future of one.
    type Listing;

    /// List the children of `dir` (names only, no `.` or `..`).
    fn list_dir(&self, dir: &Path) -> Self::Listing;
}

/// Lists directories on the calling thread with `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingLister;

impl DirectoryLister for BlockingLister {
    type Listing = Result<Vec<OsString>>;

    fn list_dir(&self, dir: &Path) -> Self::Listing {
        let entries = std::fs::read_dir(dir).map_err(|e| Error::from_io(dir, e))?;
        let mut names = entries
            .map(|entry| entry.map(|e| e.file_name()))
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| Error::from_io(dir, e))?;
        names.sort();
        log::trace!("listed {} entries in {}", names.len(), dir.display());
        Ok(names)
    }
}

/// Lists directories through `tokio::fs`.
///
/// Must be polled inside a Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsyncLister;

impl DirectoryLister for AsyncLister {
    type Listing = BoxFuture<'static, Result<Vec<OsString>>>;

    fn list_dir(&self, dir: &Path) -> Self::Listing {
        let dir = dir.to_path_buf();
        async move {
            let mut entries = tokio::fs::read_dir(&dir)
                .await
                .map_err(|e| Error::from_io(&dir, e))?;
            let mut names = Vec::new();
            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| Error::from_io(&dir, e))?
            {
                names.push(entry.file_name());
            }
            names.sort();
            log::trace!("listed {} entries in {}", names.len(), dir.display());
            Ok(names)
        }
        .boxed()
    }
}

/// Returns a function that joins child names onto `dir`.
///
/// # Examples
///
/// ```
/// use pathsift::fs::join_with;
/// use std::path::{Path, PathBuf};
///
/// let join = join_with(Path::new("/srv"));
/// assert_eq!(join("www"), PathBuf::from("/srv/www"));
/// ```
pub fn join_with<P: AsRef<Path>>(dir: &Path) -> impl Fn(P) -> PathBuf + '_ {
    move |name| dir.join(name)
}
