//! Canonical-file tie-break policy.
//!
//! When two files share a content fingerprint, exactly one stays
//! canonical. The policy approximates "keep the original copy": the
//! oldest file wins, and a shorter path (fewer characters) displaces a
//! longer one. The function is pure, total, and deterministic; equal
//! timestamps with equal path lengths keep the existing canonical record.

use crate::scanner::FileRecord;

/// Outcome of comparing the canonical record against a newcomer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The existing canonical record stays canonical; the newcomer is a
    /// duplicate.
    KeepOld,
    /// The newcomer becomes canonical; the existing record is displaced
    /// into the duplicate set.
    ReplaceWithNew,
}

/// Decide which of two records with identical content stays canonical.
///
/// The newcomer wins when the existing record is strictly newer, or when
/// the existing record's path has strictly more characters. In every
/// other case (including full ties) the existing record is kept.
#[must_use]
pub fn resolve(old: &FileRecord, new: &FileRecord) -> Resolution {
    if old.modified > new.modified || old.path_len() > new.path_len() {
        Resolution::ReplaceWithNew
    } else {
        Resolution::KeepOld
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, SystemTime};

    fn record(path: &str, age: Duration) -> FileRecord {
        FileRecord::new(
            PathBuf::from(path),
            SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000) - age,
            1,
        )
    }

    #[test]
    fn test_older_file_wins() {
        let old = record("a/x.txt", Duration::from_secs(10));
        let new = record("b/x.txt", Duration::from_secs(100));

        // Existing record is newer, so the older newcomer displaces it
        assert_eq!(resolve(&old, &new), Resolution::ReplaceWithNew);
    }

    #[test]
    fn test_existing_older_file_is_kept() {
        let old = record("a/x.txt", Duration::from_secs(100));
        let new = record("b/x.txt", Duration::from_secs(10));

        assert_eq!(resolve(&old, &new), Resolution::KeepOld);
    }

    #[test]
    fn test_equal_time_shorter_path_wins() {
        let old = record("deeply/nested/dir/x.txt", Duration::from_secs(50));
        let new = record("x.txt", Duration::from_secs(50));

        assert_eq!(resolve(&old, &new), Resolution::ReplaceWithNew);
    }

    #[test]
    fn test_equal_time_existing_shorter_path_is_kept() {
        let old = record("x.txt", Duration::from_secs(50));
        let new = record("deeply/nested/dir/x.txt", Duration::from_secs(50));

        assert_eq!(resolve(&old, &new), Resolution::KeepOld);
    }

    #[test]
    fn test_full_tie_keeps_existing() {
        let old = record("a/x.txt", Duration::from_secs(50));
        let new = record("b/y.txt", Duration::from_secs(50));

        assert_eq!(old.path_len(), new.path_len());
        assert_eq!(resolve(&old, &new), Resolution::KeepOld);
    }

    #[test]
    fn test_path_length_measured_in_characters() {
        // Same character count despite different byte lengths
        let old = record("aa/x.txt", Duration::from_secs(50));
        let new = record("ää/y.txt", Duration::from_secs(50));

        assert_eq!(resolve(&old, &new), Resolution::KeepOld);
    }
}
