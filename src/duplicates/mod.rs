//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - The content-addressed index (fingerprint → canonical record)
//! - The canonical-file tie-break policy
//! - Scan orchestration (walk → hash → observe)

pub mod finder;
pub mod index;
pub mod resolver;

// Re-export commonly used types
pub use finder::{FinderError, Scan, ScanOutcome, ScanStats};
pub use index::ContentIndex;
pub use resolver::{resolve, Resolution};
