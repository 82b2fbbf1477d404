//! Filesystem reads: metadata and directory listings.
//!
//! These are the only functions in the crate that perform I/O. Failures are
//! classified with [`Error::from_io`](crate::Error::from_io) and propagated;
//! nothing here retries or substitutes defaults.

pub mod listing;
pub mod stats;

pub use listing::{join_with, AsyncLister, BlockingLister, DirectoryLister};
pub use stats::{get_stats, is_directory, FileStats};
