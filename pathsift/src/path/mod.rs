//! Pure path utilities: depth, ancestry, and search-root reduction.
//!
//! # Reduction
//!
//! Overlapping search roots waste work, since walking `/a` already visits
//! everything under `/a/b`. [`reduce_paths`] keeps only the roots that are not
//! beneath another root in the list:
//!
//! ```
//! use pathsift::path::reduce_paths;
//! use std::path::PathBuf;
//!
//! let roots = reduce_paths(&["/srv/www", "/srv/www/static", "/var/log"]);
//! assert_eq!(roots, vec![PathBuf::from("/srv/www"), PathBuf::from("/var/log")]);
//! ```
//!
//! # Relationships
//!
//! ```
//! use pathsift::path::{is_sub_directory, PathRelationship};
//! use std::path::Path;
//!
//! assert!(is_sub_directory(Path::new("/a"), Path::new("/a/b/c")));
//! assert_eq!(
//!     PathRelationship::between(Path::new("/a/b"), Path::new("/a")),
//!     PathRelationship::Descendant
//! );
//! ```
//!
//! All comparisons are lexical. Use [`normalize::normalize`] first when roots
//! may be relative or contain `~`, `.` or `..`.

pub mod normalize;
pub mod reduce;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use reduce::{find_sub_directories, not_sub_directory, reduce_paths};
pub use relationship::{is_sub_directory, path_depth, PathRelationship};
