//! Status provider abstraction

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, GitCli, LibGit2, Result, StatusLine};

/// Something that can report the changes of a working tree.
pub trait StatusProvider {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// List the changed entries under `workdir`, relative to it.
    ///
    /// `workdir` must be the top of the working tree, since status paths
    /// are relative to it. A directory below the top is rejected with
    /// [`Error::NotWorktreeRoot`].
    fn status(&self, workdir: &Path) -> Result<Vec<StatusLine>>;
}

/// Fail unless `workdir` and `root` name the same directory.
pub(crate) fn ensure_worktree_root(workdir: &Path, root: &Path) -> Result<()> {
    let canonical = |p: &Path| dunce::canonicalize(p).unwrap_or_else(|_| p.to_path_buf());
    if canonical(workdir) == canonical(root) {
        Ok(())
    } else {
        Err(Error::NotWorktreeRoot {
            workdir: workdir.to_path_buf(),
            root: root.to_path_buf(),
        })
    }
}

impl<P: StatusProvider + ?Sized> StatusProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn status(&self, workdir: &Path) -> Result<Vec<StatusLine>> {
        (**self).status(workdir)
    }
}

/// Selectable status provider implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBackend {
    /// Spawn the `git` executable
    #[default]
    GitCli,
    /// Query the repository in-process through libgit2
    Libgit2,
}

impl StatusBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitCli => "git-cli",
            Self::Libgit2 => "libgit2",
        }
    }

    /// Build the provider for this backend. `git_program` is only used by
    /// [`StatusBackend::GitCli`].
    pub fn provider(&self, git_program: &str) -> Box<dyn StatusProvider> {
        match self {
            Self::GitCli => Box::new(GitCli::new(git_program)),
            Self::Libgit2 => Box::new(LibGit2::new()),
        }
    }
}

impl FromStr for StatusBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "git-cli" => Ok(Self::GitCli),
            "libgit2" => Ok(Self::Libgit2),
            other => Err(Error::UnknownBackend {
                name: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for StatusBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
