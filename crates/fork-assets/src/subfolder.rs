//! Copying auxiliary files into the checkout

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Copy files from `subfolder` into `destination`, creating it if needed.
///
/// With `file_name`, only that file is copied. Otherwise every regular file
/// directly inside `subfolder` is copied, and copying none is an error.
/// Returns the number of files copied.
pub fn copy_files_from_subfolder(
    subfolder: &Path,
    destination: &Path,
    file_name: Option<&str>,
) -> Result<usize> {
    if !subfolder.exists() {
        return Err(Error::MissingSubfolder {
            path: subfolder.to_path_buf(),
        });
    }
    fs::create_dir_all(destination).map_err(|e| Error::io(destination, e))?;

    if let Some(name) = file_name {
        let src = subfolder.join(name);
        if !src.is_file() {
            return Err(Error::MissingFile { path: src });
        }
        fork_fs::copy_preserving_metadata(&src, &destination.join(name))?;
        tracing::info!(file = name, dest = %destination.display(), "Copied file");
        return Ok(1);
    }

    let mut copied = 0;
    let entries = fs::read_dir(subfolder).map_err(|e| Error::io(subfolder, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(subfolder, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        fork_fs::copy_preserving_metadata(&path, &destination.join(entry.file_name()))?;
        tracing::info!(file = %path.display(), dest = %destination.display(), "Copied file");
        copied += 1;
    }

    if copied == 0 {
        return Err(Error::NothingCopied {
            path: subfolder.to_path_buf(),
        });
    }
    tracing::info!(count = copied, dest = %destination.display(), "Successfully copied files");
    Ok(copied)
}
