//! SHA-256 checksum utilities
//!
//! Provides a single canonical checksum format (`sha256:<hex>`) used to decide
//! whether two files carry the same bytes. Files are hashed in fixed-size
//! chunks so their size is never bounded by available memory.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Size of the read buffer used while hashing files
const CHUNK_SIZE: usize = 8192;

/// A SHA-256 digest of some content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum([u8; 32]);

impl Checksum {
    fn from_hasher(hasher: Sha256) -> Self {
        Self(hasher.finalize().into())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PREFIX)?;
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Compute the SHA-256 checksum of in-memory content.
pub fn compute_content_checksum(content: impl AsRef<[u8]>) -> Checksum {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    Checksum::from_hasher(hasher)
}

/// Compute the SHA-256 checksum of a file's contents.
///
/// The file is read in 8 KiB chunks and the handle is closed before returning.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> Result<Checksum> {
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).map_err(|e| Error::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(Checksum::from_hasher(hasher))
}

/// Returns true when both files hash to the same digest.
pub fn files_identical(a: &Path, b: &Path) -> Result<bool> {
    Ok(compute_file_checksum(a)? == compute_file_checksum(b)?)
}
