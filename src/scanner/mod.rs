//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Deterministic single-threaded directory walking
//! - Content fingerprinting with BLAKE3 (streaming)
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: BLAKE3 file fingerprinting
//!
//! # Example
//!
//! ```no_run
//! use filededup::scanner::{Hasher, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."));
//! let hasher = Hasher::new();
//! for entry in walker.walk() {
//!     let record = entry.unwrap();
//!     let fingerprint = hasher.fingerprint(&record.path).unwrap();
//!     println!("{}: {} bytes", record.path.display(), record.size);
//! }
//! ```

pub mod hasher;
pub mod walker;

use std::path::PathBuf;
use std::time::SystemTime;

// Re-export main types
pub use hasher::{fingerprint_hex, Fingerprint, Hasher};
pub use walker::Walker;

/// One regular, non-empty file observed during the walk.
///
/// Immutable once created; the resolver decides which record stays
/// canonical for a given content fingerprint, it never mutates records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path as yielded by the walk (root-relative or absolute, matching
    /// how the scan root was given)
    pub path: PathBuf,
    /// Last modification time
    pub modified: SystemTime,
    /// File size in bytes
    pub size: u64,
}

impl FileRecord {
    /// Create a new FileRecord.
    #[must_use]
    pub fn new(path: PathBuf, modified: SystemTime, size: u64) -> Self {
        Self {
            path,
            modified,
            size,
        }
    }

    /// Character count of the path, used by the tie-break policy.
    ///
    /// Non-UTF-8 path segments are decoded lossily; the count only needs
    /// to be consistent across records within one run.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path.to_string_lossy().chars().count()
    }

    /// Last path component, decoded lossily, used by the flatten namer.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Errors that can occur during directory traversal.
///
/// Every variant is fatal: the walk aborts on the first error and no
/// partial results are acted upon.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// A directory entry could not be read.
    #[error("failed to read entry under {root}: {source}")]
    Walk {
        /// Scan root the walk started from
        root: PathBuf,
        /// The underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// File metadata could not be read.
    #[error("failed to read metadata for {path}: {source}")]
    Metadata {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while fingerprinting a file.
///
/// Fatal for the whole run; there is no skip-and-continue mode.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A read failed mid-stream.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
