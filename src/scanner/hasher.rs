//! BLAKE3 file hasher with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing BLAKE3
//! fingerprints of file contents. Files are streamed through the digest
//! in bounded chunks; the whole file is never buffered in memory.
//!
//! Two files with equal fingerprints are treated as byte-identical;
//! the collision risk of a 256-bit cryptographic digest is accepted as
//! negligible.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::HashError;

/// BLAKE3 digest of a file's full content, used as a content-identity key.
pub type Fingerprint = [u8; 32];

/// Read buffer size for streaming hashing.
const CHUNK_SIZE: usize = 64 * 1024;

/// Streaming BLAKE3 file hasher.
#[derive(Debug, Default)]
pub struct Hasher;

impl Hasher {
    /// Create a new hasher.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the fingerprint of the file at `path`.
    ///
    /// The file handle is scoped to this call and released on every exit
    /// path, including read errors.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or a read fails
    /// mid-stream. Errors are fatal for the run; the caller does not
    /// retry.
    pub fn fingerprint(&self, path: &Path) -> Result<Fingerprint, HashError> {
        let mut file = File::open(path).map_err(|source| HashError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let mut hasher = blake3::Hasher::new();
        let mut buf = vec![0u8; CHUNK_SIZE];
        loop {
            let n = file.read(&mut buf).map_err(|source| HashError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
        }

        Ok(*hasher.finalize().as_bytes())
    }
}

/// Render a fingerprint as lowercase hex for log lines.
#[must_use]
pub fn fingerprint_hex(fingerprint: &Fingerprint) -> String {
    fingerprint.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_fingerprint_deterministic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.bin");
        fs::write(&path, b"some content").unwrap();

        let hasher = Hasher::new();
        assert_eq!(
            hasher.fingerprint(&path).unwrap(),
            hasher.fingerprint(&path).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_distinguishes_content() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("b.bin");
        fs::write(&a, b"content a").unwrap();
        fs::write(&b, b"content b").unwrap();

        let hasher = Hasher::new();
        assert_ne!(
            hasher.fingerprint(&a).unwrap(),
            hasher.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_same_content_different_paths() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.bin");
        let b = dir.path().join("nested");
        fs::create_dir(&b).unwrap();
        let b = b.join("b.bin");
        fs::write(&a, b"identical").unwrap();
        fs::write(&b, b"identical").unwrap();

        let hasher = Hasher::new();
        assert_eq!(
            hasher.fingerprint(&a).unwrap(),
            hasher.fingerprint(&b).unwrap()
        );
    }

    #[test]
    fn test_fingerprint_spans_chunk_boundary() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("big.bin");

        // Larger than one read buffer, differing only in the last byte
        let mut content = vec![0xabu8; CHUNK_SIZE + 17];
        fs::write(&path, &content).unwrap();
        let hasher = Hasher::new();
        let first = hasher.fingerprint(&path).unwrap();

        *content.last_mut().unwrap() = 0xcd;
        fs::write(&path, &content).unwrap();
        let second = hasher.fingerprint(&path).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_fingerprint_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        let err = Hasher::new().fingerprint(&missing).unwrap_err();
        assert!(matches!(err, HashError::Open { .. }));
    }

    #[test]
    fn test_fingerprint_hex_width() {
        let hex = fingerprint_hex(&[0u8; 32]);
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c == '0'));

        let hex = fingerprint_hex(&[0xff; 32]);
        assert!(hex.chars().all(|c| c == 'f'));
    }
}
