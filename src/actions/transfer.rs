//! Copy, move, and remove actions for duplicate records.
//!
//! Copy-aside and move-aside mirror each duplicate's path relative to
//! the scan root under the destination directory, creating parent
//! directories as needed. The destination may already exist; files are
//! merged in. Remove-in-place deletes the duplicate where it stands.
//!
//! All three honor dry-run: the intended operation is logged and nothing
//! is mutated.

use std::fs;
use std::path::{Path, PathBuf};

use crate::scanner::FileRecord;

use super::ActionError;

/// Copy every duplicate record under `dup_dir`, preserving its path
/// relative to `root`. Originals are left untouched.
///
/// # Errors
///
/// Returns [`ActionError`] on the first directory-creation or copy
/// failure.
pub fn copy_aside(
    records: &[FileRecord],
    root: &Path,
    dup_dir: &Path,
    dry_run: bool,
) -> Result<(), ActionError> {
    log::info!("Duplicate files will be copied to {}", dup_dir.display());
    for record in records {
        let dest = mirror_path(record, root, dup_dir)?;
        copy_file(&record.path, &dest, dry_run)?;
    }
    Ok(())
}

/// Relocate every duplicate record under `dup_dir`, preserving its path
/// relative to `root`.
///
/// # Errors
///
/// Returns [`ActionError`] on the first directory-creation or rename
/// failure. A failed rename is fatal; there is no copy+delete fallback.
pub fn move_aside(
    records: &[FileRecord],
    root: &Path,
    dup_dir: &Path,
    dry_run: bool,
) -> Result<(), ActionError> {
    log::info!("Duplicate files will be moved to {}", dup_dir.display());
    for record in records {
        let dest = mirror_path(record, root, dup_dir)?;
        move_file(&record.path, &dest, dry_run)?;
    }
    Ok(())
}

/// Delete every duplicate record's file in place.
///
/// # Errors
///
/// Returns [`ActionError::Remove`] on the first failed deletion.
pub fn remove_in_place(records: &[FileRecord], dry_run: bool) -> Result<(), ActionError> {
    for record in records {
        log::warn!("Removing {}", record.path.display());
        if dry_run {
            continue;
        }
        fs::remove_file(&record.path).map_err(|source| ActionError::Remove {
            path: record.path.clone(),
            source,
        })?;
    }
    Ok(())
}

/// Copy one file, creating parent directories as needed.
pub(crate) fn copy_file(from: &Path, to: &Path, dry_run: bool) -> Result<(), ActionError> {
    log::warn!("Copying {} to {}", from.display(), to.display());
    if dry_run {
        return Ok(());
    }
    ensure_parent(to)?;
    fs::copy(from, to).map_err(|source| ActionError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Relocate one file via rename, creating parent directories as needed.
pub(crate) fn move_file(from: &Path, to: &Path, dry_run: bool) -> Result<(), ActionError> {
    log::warn!("Moving {} to {}", from.display(), to.display());
    if dry_run {
        return Ok(());
    }
    ensure_parent(to)?;
    fs::rename(from, to).map_err(|source| ActionError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Destination for a record mirrored under `dest_root`, preserving its
/// layout relative to the scan root.
fn mirror_path(record: &FileRecord, root: &Path, dest_root: &Path) -> Result<PathBuf, ActionError> {
    let relative = record
        .path
        .strip_prefix(root)
        .map_err(|_| ActionError::OutsideRoot {
            path: record.path.clone(),
            root: root.to_path_buf(),
        })?;
    Ok(dest_root.join(relative))
}

fn ensure_parent(dest: &Path) -> Result<(), ActionError> {
    let Some(parent) = dest.parent() else {
        return Ok(());
    };
    fs::create_dir_all(parent).map_err(|source| ActionError::CreateDir {
        path: parent.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;
    use tempfile::tempdir;

    fn record_for(path: &Path) -> FileRecord {
        let metadata = fs::metadata(path).unwrap();
        FileRecord::new(
            path.to_path_buf(),
            metadata.modified().unwrap(),
            metadata.len(),
        )
    }

    #[test]
    fn test_copy_aside_mirrors_relative_path() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("b")).unwrap();
        fs::write(root.join("b/x.txt"), b"dup").unwrap();

        let dump = dir.path().join("dump");
        let records = vec![record_for(&root.join("b/x.txt"))];
        copy_aside(&records, &root, &dump, false).unwrap();

        assert_eq!(fs::read(dump.join("b/x.txt")).unwrap(), b"dup");
        // Original untouched
        assert!(root.join("b/x.txt").exists());
    }

    #[test]
    fn test_copy_aside_merges_into_existing_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("x.txt"), b"dup").unwrap();

        let dump = dir.path().join("dump");
        fs::create_dir_all(&dump).unwrap();
        fs::write(dump.join("unrelated.txt"), b"keep").unwrap();

        copy_aside(&[record_for(&root.join("x.txt"))], &root, &dump, false).unwrap();

        assert!(dump.join("x.txt").exists());
        assert!(dump.join("unrelated.txt").exists());
    }

    #[test]
    fn test_move_aside_relocates_file() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub/y.txt"), b"dup").unwrap();

        let dump = dir.path().join("dump");
        move_aside(&[record_for(&root.join("sub/y.txt"))], &root, &dump, false).unwrap();

        assert!(!root.join("sub/y.txt").exists());
        assert_eq!(fs::read(dump.join("sub/y.txt")).unwrap(), b"dup");
    }

    #[test]
    fn test_remove_in_place_deletes_file() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("dup.txt");
        fs::write(&target, b"dup").unwrap();

        remove_in_place(&[record_for(&target)], false).unwrap();
        assert!(!target.exists());
    }

    #[test]
    fn test_remove_missing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let missing = FileRecord::new(dir.path().join("gone.txt"), SystemTime::now(), 1);

        let err = remove_in_place(&[missing], false).unwrap_err();
        assert!(matches!(err, ActionError::Remove { .. }));
    }

    #[test]
    fn test_dry_run_mutates_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("x.txt"), b"dup").unwrap();
        let dump = dir.path().join("dump");
        let records = vec![record_for(&root.join("x.txt"))];

        copy_aside(&records, &root, &dump, true).unwrap();
        move_aside(&records, &root, &dump, true).unwrap();
        remove_in_place(&records, true).unwrap();

        assert!(root.join("x.txt").exists());
        assert!(!dump.exists());
    }

    #[test]
    fn test_record_outside_root_is_rejected() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("root");
        let elsewhere = dir.path().join("elsewhere.txt");
        fs::create_dir_all(&root).unwrap();
        fs::write(&elsewhere, b"x").unwrap();

        let err = copy_aside(
            &[record_for(&elsewhere)],
            &root,
            &dir.path().join("dump"),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::OutsideRoot { .. }));
    }
}
