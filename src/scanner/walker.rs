//! Directory walker implementation using walkdir.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for traversing the input
//! tree and yielding one [`FileRecord`] per regular, non-empty file.
//! Traversal is single-threaded and iterative internally, so deep trees
//! pose no recursion-depth concerns.
//!
//! Children are visited in lexical name order. Traversal order does not
//! affect the final canonical/duplicate partition, but a deterministic
//! order keeps runs reproducible and testable.
//!
//! # Policy per entry
//!
//! - Directories: descend, produce no record.
//! - Zero-byte files: skip with an info log, produce no record.
//! - Symlinks and other non-regular entries: skip with a debug log.
//! - Any traversal or metadata error: fatal, aborts the walk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileRecord, ScanError};

/// Deterministic single-threaded directory walker.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Walk the tree, yielding file records in lexical path order.
    ///
    /// The first error yielded is fatal: the caller must abort the run
    /// rather than continue iterating.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use filededup::scanner::Walker;
    /// use std::path::Path;
    ///
    /// let walker = Walker::new(Path::new("."));
    /// let records: Result<Vec<_>, _> = walker.walk().collect();
    /// println!("Found {} files", records.unwrap().len());
    /// ```
    pub fn walk(&self) -> impl Iterator<Item = Result<FileRecord, ScanError>> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |entry_result| {
                let entry = match entry_result {
                    Ok(entry) => entry,
                    Err(source) => {
                        return Some(Err(ScanError::Walk {
                            root: self.root.clone(),
                            source,
                        }))
                    }
                };

                if entry.file_type().is_dir() {
                    return None;
                }

                if !entry.file_type().is_file() {
                    log::debug!("Skipping non-regular entry {}", entry.path().display());
                    return None;
                }

                let metadata = match entry.metadata() {
                    Ok(metadata) => metadata,
                    Err(source) => {
                        return Some(Err(ScanError::Walk {
                            root: self.root.clone(),
                            source,
                        }))
                    }
                };

                if metadata.len() == 0 {
                    log::info!("Found: {} : SKIPPING filesize:0", entry.path().display());
                    return None;
                }

                let size = metadata.len();
                let modified = match metadata.modified() {
                    Ok(modified) => modified,
                    Err(source) => {
                        return Some(Err(ScanError::Metadata {
                            path: entry.into_path(),
                            source,
                        }))
                    }
                };

                Some(Ok(FileRecord::new(entry.into_path(), modified, size)))
            })
    }
}
