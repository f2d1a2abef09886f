//! Content-addressed index of observed files.
//!
//! Maps each fingerprint to exactly one canonical [`FileRecord`] and
//! accumulates every displaced record in a single flat duplicate set
//! spanning all fingerprints. The duplicate set is keyed by path, which
//! is unique per tree, so no two distinct records can collapse to the
//! same key.
//!
//! Invariant: for every fingerprint observed, exactly one record is
//! canonical and that record is absent from the duplicate set. The index
//! is constructed per run and passed by reference; there is no global
//! state.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::scanner::{FileRecord, Fingerprint};

use super::resolver::{resolve, Resolution};

/// Per-run index partitioning observed files into canonical records and
/// duplicates.
#[derive(Debug, Default)]
pub struct ContentIndex {
    /// One canonical record per fingerprint
    canonical: HashMap<Fingerprint, FileRecord>,
    /// Displaced records across all fingerprints, keyed by path.
    /// BTreeMap keeps duplicate iteration deterministic.
    duplicates: BTreeMap<PathBuf, FileRecord>,
}

impl ContentIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed file.
    ///
    /// If the fingerprint is new, the record becomes canonical. Otherwise
    /// the resolver decides: either the newcomer joins the duplicate set,
    /// or it displaces the previous canonical record into the duplicate
    /// set.
    pub fn observe(&mut self, fingerprint: Fingerprint, record: FileRecord) {
        match self.canonical.entry(fingerprint) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => match resolve(slot.get(), &record) {
                Resolution::ReplaceWithNew => {
                    // A record promoted to canonical must not linger in
                    // the duplicate set.
                    self.duplicates.remove(&record.path);
                    let displaced = slot.insert(record);
                    self.duplicates.insert(displaced.path.clone(), displaced);
                }
                Resolution::KeepOld => {
                    self.duplicates.insert(record.path.clone(), record);
                }
            },
        }
    }

    /// Number of distinct fingerprints observed.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.canonical.len()
    }

    /// Number of records in the duplicate set.
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.duplicates.len()
    }

    /// Finalized canonical records, one per fingerprint, sorted by path
    /// for deterministic downstream iteration.
    #[must_use]
    pub fn canonical_records(&self) -> Vec<FileRecord> {
        let mut records: Vec<FileRecord> = self.canonical.values().cloned().collect();
        records.sort_by(|a, b| a.path.cmp(&b.path));
        records
    }

    /// Finalized duplicate records across all fingerprints, sorted by
    /// path.
    #[must_use]
    pub fn duplicate_records(&self) -> Vec<FileRecord> {
        self.duplicates.values().cloned().collect()
    }
}
