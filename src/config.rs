//! Per-run configuration derived from CLI arguments.
//!
//! A [`RunConfig`] is constructed once per run and passed by reference to
//! the scan and action phases; there is no process-wide configuration
//! state. Precondition checks (input directory exists, flatten target
//! absent) run before any file is touched.

use std::path::PathBuf;

use thiserror::Error;

use crate::cli::{Cli, DupAction, FlattenMode};

/// Errors detected before the walk starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The input directory does not exist.
    #[error("input directory not found: {0}")]
    InputNotFound(PathBuf),

    /// The input path exists but is not a directory.
    #[error("input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// The flatten target already exists.
    #[error("flatten directory must not exist: {0}")]
    FlattenTargetExists(PathBuf),
}

/// Flatten settings, present only when flattening is enabled.
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Destination directory; must not exist at run start.
    pub dir: PathBuf,
    /// Whether files are copied or moved into the destination.
    pub mode: FlattenMode,
}

/// Validated configuration for a single run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Compute and log all decisions without mutating the filesystem.
    pub dry_run: bool,
    /// Action applied to duplicate records.
    pub dup_action: DupAction,
    /// Destination for copy/move duplicate actions; may pre-exist.
    pub dup_dir: PathBuf,
    /// Flatten settings, if flattening is enabled.
    pub flatten: Option<FlattenConfig>,
}

impl RunConfig {
    /// Build a run configuration from parsed CLI arguments.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            root: cli.path.clone(),
            dry_run: cli.dry_run,
            dup_action: cli.dup_action,
            dup_dir: cli.dup_dir.clone(),
            flatten: cli.flatten.then(|| FlattenConfig {
                dir: cli.flatten_dir.clone(),
                mode: cli.flatten_mode,
            }),
        }
    }

    /// Check run preconditions before any processing.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory is missing or not a
    /// directory, or if flattening is enabled and its target exists.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root.exists() {
            return Err(ConfigError::InputNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ConfigError::NotADirectory(self.root.clone()));
        }
        if let Some(flatten) = &self.flatten {
            if flatten.dir.exists() {
                return Err(ConfigError::FlattenTargetExists(flatten.dir.clone()));
            }
        }
        Ok(())
    }
}
