//! Scan orchestration: walk, hash, observe.
//!
//! # Overview
//!
//! This module drives the duplicate detection pipeline in a single
//! synchronous pass: the walker yields regular non-empty files in
//! lexical order, each file is streamed through the hasher, and the
//! resulting fingerprint is fed to the content index. The first I/O
//! error aborts the scan; no partial results are acted upon.
//!
//! # Example
//!
//! ```no_run
//! use filededup::duplicates::Scan;
//! use std::path::Path;
//!
//! let outcome = Scan::new(Path::new(".")).run().unwrap();
//! println!(
//!     "{} unique, {} duplicates",
//!     outcome.canonical.len(),
//!     outcome.duplicates.len()
//! );
//! ```

use std::path::{Path, PathBuf};

use bytesize::ByteSize;
use thiserror::Error;

use crate::scanner::{fingerprint_hex, FileRecord, HashError, Hasher, ScanError, Walker};

use super::ContentIndex;

/// Error type for an aborted scan.
#[derive(Debug, Error)]
pub enum FinderError {
    /// Traversal failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Fingerprinting failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

/// Statistics accumulated over one scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Number of files fingerprinted
    pub files_hashed: usize,
    /// Total bytes streamed through the hasher
    pub bytes_hashed: u64,
    /// Number of distinct content fingerprints
    pub distinct_contents: usize,
    /// Number of records in the duplicate set
    pub duplicate_files: usize,
}

impl ScanStats {
    /// Log a one-line summary of the scan.
    pub fn log_summary(&self) {
        log::info!(
            "Scanned {} file(s) ({}): {} distinct content(s), {} duplicate(s)",
            self.files_hashed,
            ByteSize(self.bytes_hashed),
            self.distinct_contents,
            self.duplicate_files
        );
    }
}

/// Result of a completed scan: the canonical/duplicate partition.
#[derive(Debug)]
pub struct ScanOutcome {
    /// One canonical record per distinct fingerprint, sorted by path
    pub canonical: Vec<FileRecord>,
    /// All displaced records across all fingerprints, sorted by path
    pub duplicates: Vec<FileRecord>,
    /// Scan statistics
    pub stats: ScanStats,
}

/// Single-pass duplicate scan over one directory tree.
#[derive(Debug)]
pub struct Scan {
    root: PathBuf,
    hasher: Hasher,
}

impl Scan {
    /// Create a scan rooted at `root`.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            hasher: Hasher::new(),
        }
    }

    /// Walk the tree, fingerprint every regular non-empty file, and
    /// partition the records into canonical and duplicate sets.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError`] on the first traversal or read failure;
    /// the scan does not continue past an error.
    pub fn run(&self) -> Result<ScanOutcome, FinderError> {
        let mut index = ContentIndex::new();
        let mut stats = ScanStats::default();

        let walker = Walker::new(&self.root);
        for entry in walker.walk() {
            let record = entry?;
            let fingerprint = self.hasher.fingerprint(&record.path)?;
            log::info!(
                "Found: {} : {}",
                record.path.display(),
                fingerprint_hex(&fingerprint)
            );

            stats.files_hashed += 1;
            stats.bytes_hashed += record.size;
            index.observe(fingerprint, record);
        }

        stats.distinct_contents = index.distinct_count();
        stats.duplicate_files = index.duplicate_count();

        Ok(ScanOutcome {
            canonical: index.canonical_records(),
            duplicates: index.duplicate_records(),
            stats,
        })
    }
}
