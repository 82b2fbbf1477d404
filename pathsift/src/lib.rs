#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathsift
//!
//! Path utilities for file-finding tools.
//!
//! This library reduces overlapping search roots to a minimal set, compares
//! paths by hierarchy, lists directories through a blocking or async
//! interface, and builds file predicates from glob, regex, extension, size
//! and time expressions.
//!
//! ## Core Types
//!
//! - [`reduce_paths`], [`is_sub_directory`] and [`path_depth`]: path
//!   hierarchy
//! - [`DirectoryLister`]: sorted directory listings, blocking or async
//! - [`FileFilter`] and [`Finder`]: predicates and the search walk
//! - [`SearchConfig`] and [`ConfigBuilder`]: layered YAML configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathsift::{is_sub_directory, path_depth, reduce_paths};
//! use std::path::{Path, PathBuf};
//!
//! let roots = reduce_paths(&["/a/b", "/c", "/a", "/a/b/d"]);
//! assert_eq!(roots, vec![PathBuf::from("/a"), PathBuf::from("/c")]);
//!
//! assert!(is_sub_directory(Path::new("/a"), Path::new("/a/b/d")));
//! assert_eq!(path_depth(Path::new("/a/b")), 3);
//! ```

pub mod compare;
pub mod config;
pub mod error;
pub mod filter;
pub mod fs;
pub mod logging;
pub mod path;
pub mod predicate;
pub mod search;

// Re-export key types at crate root for convenience
pub use compare::{Comparison, Operator, UnitKind};
pub use config::{ConfigBuilder, SearchConfig};
pub use error::{Error, Result};
pub use filter::FileFilter;
pub use fs::{get_stats, AsyncLister, BlockingLister, DirectoryLister, FileStats};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    find_sub_directories, is_sub_directory, not_sub_directory, path_depth, reduce_paths,
    PathRelationship,
};
pub use predicate::TimeField;
pub use search::{find, Finder};
