//! forksync configuration file
//!
//! Every section is optional; missing values fall back to the defaults
//! that match the chromium fork layout.

use std::path::{Path, PathBuf};

use fork_assets::AssetsConfig;
use fork_fs::ConfigStore;
use fork_git::StatusBackend;
use fork_sync::RootMarkers;
use serde::Deserialize;

use crate::error::Result;

/// File looked up in the current directory when `--config` is not given
pub const CONFIG_FILE: &str = "forksync.toml";

/// `[status]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    pub backend: StatusBackend,
    /// Program used by the `git-cli` backend
    pub git: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            backend: StatusBackend::default(),
            git: "git".to_string(),
        }
    }
}

/// Whole configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub roots: RootMarkers,
    pub status: StatusConfig,
    pub assets: AssetsConfig,
}

/// Load settings from `explicit`, else from `cwd/forksync.toml` when it
/// exists, else the defaults.
pub fn load_settings(explicit: Option<&Path>, cwd: &Path) -> Result<Settings> {
    let path: Option<PathBuf> = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => Some(cwd.join(CONFIG_FILE)).filter(|p| p.is_file()),
    };

    match path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "Loading config");
            Ok(ConfigStore::new().load(&p)?)
        }
        None => Ok(Settings::default()),
    }
}
