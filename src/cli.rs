//! Command-line interface definitions for filededup.
//!
//! This module defines all CLI arguments and options using the clap derive API.
//!
//! # Example
//!
//! ```bash
//! # Report duplicates without touching anything
//! filededup ~/Downloads
//!
//! # Copy duplicates into ./dupdump, preserving their relative layout
//! filededup ~/Downloads --dup-action copy
//!
//! # Remove duplicates in place, but only show what would happen
//! filededup ~/Downloads --dup-action remove --dry-run
//!
//! # Flatten all unique files into one directory, moving them
//! filededup ~/Downloads --flatten --flatten-dir ./all --flatten-mode move
//! ```

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Deterministic duplicate file finder and resolver.
///
/// filededup scans a directory tree, finds files with identical content
/// via BLAKE3 hashing, and resolves duplicates deterministically: the
/// oldest file wins, with shorter paths breaking ties. Duplicates can be
/// copied aside, moved aside, or removed; unique files can be flattened
/// into a single directory with collision-free renaming.
#[derive(Debug, Parser)]
#[command(name = "filededup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan for duplicate files
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every decision without mutating the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// What to do with duplicate files after the scan
    #[arg(long, value_enum, default_value = "none")]
    pub dup_action: DupAction,

    /// Destination for copied/moved duplicates
    ///
    /// The directory may already exist; duplicates are merged in,
    /// preserving their path relative to the scan root.
    #[arg(long, value_name = "PATH", default_value = "./dupdump")]
    pub dup_dir: PathBuf,

    /// Consolidate all surviving unique files into a single directory
    #[arg(long)]
    pub flatten: bool,

    /// Flatten destination directory
    ///
    /// Must not already exist; the run fails fast rather than merging
    /// into unrelated content.
    #[arg(long, value_name = "PATH", default_value = "./flatten")]
    pub flatten_dir: PathBuf,

    /// Whether flattening copies or moves the unique files
    #[arg(long, value_enum, default_value = "copy")]
    pub flatten_mode: FlattenMode,

    /// Report fatal errors as structured JSON on stderr
    #[arg(long)]
    pub json_errors: bool,
}

/// Action applied to duplicate records after the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DupAction {
    /// Copy duplicates into the dup directory; originals are untouched
    Copy,
    /// Move duplicates into the dup directory
    Move,
    /// Delete duplicates in place
    Remove,
    /// Report duplicates only
    None,
}

/// Transfer mode for flattening unique files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlattenMode {
    /// Copy files into the flatten directory
    Copy,
    /// Move files into the flatten directory
    Move,
}

impl std::fmt::Display for DupAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DupAction::Copy => write!(f, "copy"),
            DupAction::Move => write!(f, "move"),
            DupAction::Remove => write!(f, "remove"),
            DupAction::None => write!(f, "none"),
        }
    }
}

impl std::fmt::Display for FlattenMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlattenMode::Copy => write!(f, "copy"),
            FlattenMode::Move => write!(f, "move"),
        }
    }
}
