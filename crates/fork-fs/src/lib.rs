//! Filesystem primitives for forksync
//!
//! Provides content checksums, metadata-preserving copies and
//! format-agnostic config loading.

pub mod checksum;
pub mod config;
pub mod copy;
pub mod error;
pub mod path;

pub use checksum::{Checksum, compute_content_checksum, compute_file_checksum, files_identical};
pub use config::ConfigStore;
pub use copy::copy_preserving_metadata;
pub use error::{Error, Result};
pub use path::resolve_absolute;
