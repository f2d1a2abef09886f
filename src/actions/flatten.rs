//! Flatten canonical files into a single directory.
//!
//! Flattening discards the original directory structure: every surviving
//! unique file is copied or moved into one destination directory under a
//! collision-free name produced by [`FlattenNamer`]. The destination must
//! not exist when the run starts; that precondition is validated before
//! the walk (see [`crate::config::RunConfig::validate`]).

use std::collections::HashSet;

use crate::cli::FlattenMode;
use crate::config::FlattenConfig;
use crate::scanner::FileRecord;

use super::{transfer, ActionError};

/// Assigns a unique output filename to each flattened record.
///
/// The first occurrence of a base name is used as-is. Later occurrences
/// get a numeric suffix inserted before the extension (`x.txt` becomes
/// `x_1.txt`), probing increasing suffixes against every name assigned
/// so far until a free one is found. The mapping is injective: no two
/// records ever receive the same name, even when a suffixed name would
/// collide with a later original.
#[derive(Debug, Default)]
pub struct FlattenNamer {
    assigned: HashSet<String>,
}

impl FlattenNamer {
    /// Create a namer with no assigned names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve and return a unique output name for `base`.
    pub fn assign(&mut self, base: &str) -> String {
        if self.assigned.insert(base.to_string()) {
            return base.to_string();
        }

        let (stem, extension) = split_name(base);
        let mut n = 1usize;
        loop {
            let candidate = match extension {
                Some(extension) => format!("{stem}_{n}.{extension}"),
                None => format!("{stem}_{n}"),
            };
            if self.assigned.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Split a filename into stem and extension for suffix insertion.
///
/// A leading dot does not start an extension, so `.hidden` stays whole.
fn split_name(base: &str) -> (&str, Option<&str>) {
    match base.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() => (stem, Some(extension)),
        _ => (base, None),
    }
}

/// Flatten every canonical record into `config.dir`.
///
/// Records must arrive in a stable order (the scan yields them sorted by
/// path) so repeated runs produce the same name mapping.
///
/// # Errors
///
/// Returns [`ActionError`] on the first failed copy, rename, or
/// directory creation.
pub fn flatten(
    records: &[FileRecord],
    config: &FlattenConfig,
    dry_run: bool,
) -> Result<(), ActionError> {
    log::info!(
        "Non-duplicate files will be flattened into {}",
        config.dir.display()
    );

    let mut namer = FlattenNamer::new();
    for record in records {
        let name = namer.assign(&record.base_name());
        let dest = config.dir.join(name);
        match config.mode {
            FlattenMode::Copy => transfer::copy_file(&record.path, &dest, dry_run)?,
            FlattenMode::Move => transfer::move_file(&record.path, &dest, dry_run)?,
        }
    }
    Ok(())
}
