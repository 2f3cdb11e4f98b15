//! Downloading release assets

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{AssetBundle, Error, Result};

/// Downloads a release asset into a directory.
pub trait ReleaseFetcher {
    /// Download `bundle.asset` of release `bundle.tag` into `dir` and return
    /// the downloaded file's path.
    fn fetch(&self, dir: &Path, bundle: &AssetBundle) -> Result<PathBuf>;
}

/// Fetcher backed by the GitHub CLI (`gh release download`).
#[derive(Debug, Clone)]
pub struct GhRelease {
    program: String,
    repo: Option<String>,
}

impl Default for GhRelease {
    fn default() -> Self {
        Self::new("gh", None)
    }
}

impl GhRelease {
    pub fn new(program: impl Into<String>, repo: Option<String>) -> Self {
        Self {
            program: program.into(),
            repo,
        }
    }

    fn args(&self, dir: &Path, bundle: &AssetBundle) -> Vec<String> {
        let mut args = vec![
            "release".to_string(),
            "download".to_string(),
            bundle.tag.clone(),
            "--dir".to_string(),
            dir.display().to_string(),
            "--pattern".to_string(),
            bundle.asset.clone(),
        ];
        if let Some(repo) = &self.repo {
            args.push("--repo".to_string());
            args.push(repo.clone());
        }
        args
    }
}

impl ReleaseFetcher for GhRelease {
    fn fetch(&self, dir: &Path, bundle: &AssetBundle) -> Result<PathBuf> {
        tracing::info!(tag = %bundle.tag, asset = %bundle.asset, "Fetching release asset");

        let output = Command::new(&self.program)
            .args(self.args(dir, bundle))
            .output()
            .map_err(|source| Error::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let path = dir.join(&bundle.asset);
        if !path.is_file() {
            return Err(Error::MissingDownload { path });
        }
        Ok(path)
    }
}
