//! File actions module.
//!
//! This module materializes the decisions of a completed scan:
//! - Copying or moving duplicate records aside, mirroring their layout
//!   relative to the scan root
//! - Removing duplicate records in place
//! - Flattening canonical records into a single directory with
//!   collision-free renaming
//!
//! Dry-run semantics apply uniformly: every mutating filesystem
//! operation (create directory, copy, move, delete) is replaced by a
//! log-only notice.

pub mod flatten;
pub mod transfer;

// Re-export commonly used types
pub use flatten::{flatten, FlattenNamer};
pub use transfer::{copy_aside, move_aside, remove_in_place};

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for file placement actions.
///
/// Every variant is fatal for the run; there are no retries and no
/// fallbacks (a failed rename is never replaced by copy+delete).
#[derive(Debug, Error)]
pub enum ActionError {
    /// Creating a destination directory failed.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Copying a file failed.
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Renaming a file failed.
    #[error("failed to move {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Deleting a file failed.
    #[error("failed to remove {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A record's path was not under the scan root.
    #[error("file {path} is outside the scan root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },
}
