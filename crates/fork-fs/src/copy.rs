//! Metadata-preserving file copies

use std::fs;
use std::path::Path;

use filetime::{FileTime, set_file_times};

use crate::{Error, Result};

/// Copy `src` over `dst`, keeping the source's permissions and timestamps.
///
/// The byte copy carries the permission bits; access and modification times
/// are restored afterwards so the destination does not look freshly touched
/// to tools that compare stat data.
///
/// Returns the number of bytes copied.
pub fn copy_preserving_metadata(src: &Path, dst: &Path) -> Result<u64> {
    let metadata = fs::metadata(src).map_err(|e| Error::io(src, e))?;
    let copied = fs::copy(src, dst).map_err(|e| Error::io(dst, e))?;

    let atime = FileTime::from_last_access_time(&metadata);
    let mtime = FileTime::from_last_modification_time(&metadata);
    set_file_times(dst, atime, mtime).map_err(|e| Error::io(dst, e))?;

    tracing::trace!(
        src = %src.display(),
        dst = %dst.display(),
        bytes = copied,
        "Copied file with metadata"
    );
    Ok(copied)
}
