//! Gzip-compressed tar archives

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

use flate2::read::GzDecoder;
use tar::Archive;

use crate::{Error, Result};

fn open(path: &Path) -> Result<Archive<GzDecoder<File>>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    Ok(Archive::new(GzDecoder::new(file)))
}

/// First path component of the archive's first member.
pub fn first_component(archive_path: &Path) -> Result<PathBuf> {
    let mut archive = open(archive_path)?;
    let mut entries = archive.entries().map_err(|e| Error::io(archive_path, e))?;
    let entry = entries
        .next()
        .ok_or_else(|| Error::EmptyArchive {
            path: archive_path.to_path_buf(),
        })?
        .map_err(|e| Error::io(archive_path, e))?;
    let path = entry.path().map_err(|e| Error::io(archive_path, e))?;
    path.components()
        .find_map(|c| match c {
            Component::Normal(name) => Some(PathBuf::from(name)),
            _ => None,
        })
        .ok_or_else(|| Error::EmptyArchive {
            path: archive_path.to_path_buf(),
        })
}

/// Unpack `archive_path` under `target`.
///
/// With `strip_first_component` the leading directory of every member is
/// dropped (members that are only that directory are skipped) and `target`
/// is returned. Otherwise the archive is unpacked as-is and
/// `target/<first component>` is returned.
pub fn unpack_tar_gz(archive_path: &Path, target: &Path, strip_first_component: bool) -> Result<PathBuf> {
    fs::create_dir_all(target).map_err(|e| Error::io(target, e))?;

    if !strip_first_component {
        let root = target.join(first_component(archive_path)?);
        open(archive_path)?
            .unpack(target)
            .map_err(|e| Error::io(target, e))?;
        return Ok(root);
    }

    let mut archive = open(archive_path)?;
    let entries = archive.entries().map_err(|e| Error::io(archive_path, e))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| Error::io(archive_path, e))?;
        let member = entry.path().map_err(|e| Error::io(archive_path, e))?.into_owned();
        let stripped: PathBuf = member.components().skip(1).collect();
        if stripped.as_os_str().is_empty() {
            continue;
        }
        if stripped
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(Error::UnsafeArchiveEntry {
                archive: archive_path.to_path_buf(),
                entry: member,
            });
        }

        let dest = target.join(&stripped);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        entry.unpack(&dest).map_err(|e| Error::io(&dest, e))?;
    }
    tracing::debug!(archive = %archive_path.display(), target = %target.display(), "Unpacked archive");
    Ok(target.to_path_buf())
}
