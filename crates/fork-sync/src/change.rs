//! Change kinds and discovery policy

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Why a path was discovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    Modified,
    Added,
    /// Recognized but never synced; reaching the copy step is an error.
    Deleted,
    Untracked,
}

impl ChangeKind {
    /// Map a trimmed porcelain status code to a change kind.
    ///
    /// Only the codes the fork workflow produces are supported:
    /// `M`, `MM`, `A`, `AM`, `D` and `??`.
    pub fn from_status_code(code: &str) -> Option<Self> {
        match code {
            "M" | "MM" => Some(Self::Modified),
            "A" | "AM" => Some(Self::Added),
            "D" => Some(Self::Deleted),
            "??" => Some(Self::Untracked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modified => "modified",
            Self::Added => "added",
            Self::Deleted => "deleted",
            Self::Untracked => "untracked",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What status-based discovery does with untracked paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UntrackedFilesMode {
    /// An untracked path aborts the whole sync
    #[default]
    NotAllowed,
    /// Untracked paths are synced like any other
    Allowed,
    /// Untracked paths are skipped
    Ignored,
}

impl UntrackedFilesMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotAllowed => "not_allowed",
            Self::Allowed => "allowed",
            Self::Ignored => "ignored",
        }
    }
}

impl FromStr for UntrackedFilesMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "not_allowed" => Ok(Self::NotAllowed),
            "allowed" => Ok(Self::Allowed),
            "ignored" => Ok(Self::Ignored),
            other => Err(Error::InvalidUntrackedMode {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for UntrackedFilesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file to sync, relative to the source root.
///
/// Never a directory: directories are expanded into their files during
/// discovery.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DiscoveredEntry {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

impl DiscoveredEntry {
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}
