//! Status provider backed by the `git` executable

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::provider::ensure_worktree_root;
use crate::{Error, Result, StatusLine, StatusProvider, parse_porcelain};

/// Runs `git status --porcelain` as a subprocess.
///
/// The working directory is handed to the spawned command only; the
/// process-wide current directory is never changed.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run the configured program with `args` inside `workdir` and return
    /// its stdout.
    pub fn run(&self, workdir: &Path, args: &[&str]) -> Result<String> {
        let program = self.program.display().to_string();
        tracing::debug!(program = %program, ?args, workdir = %workdir.display(), "Running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|source| Error::Spawn {
                program: program.clone(),
                workdir: workdir.to_path_buf(),
                source,
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).to_string())
        } else {
            Err(Error::CommandFailed {
                program,
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl StatusProvider for GitCli {
    fn name(&self) -> &'static str {
        "git-cli"
    }

    fn status(&self, workdir: &Path) -> Result<Vec<StatusLine>> {
        let toplevel = self.run(workdir, &["rev-parse", "--show-toplevel"])?;
        ensure_worktree_root(workdir, Path::new(toplevel.trim()))?;

        let stdout = self.run(workdir, &["status", "--porcelain"])?;
        parse_porcelain(&stdout)
    }
}
