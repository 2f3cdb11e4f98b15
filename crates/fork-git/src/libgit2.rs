//! Status provider backed by libgit2

use std::path::Path;

use git2::{Repository, Status, StatusOptions};

use crate::provider::ensure_worktree_root;
use crate::{Error, Result, StatusLine, StatusProvider};

/// Queries the repository in-process and renders each entry with the code
/// `git status --porcelain` would print for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LibGit2;

impl LibGit2 {
    pub fn new() -> Self {
        Self
    }
}

impl StatusProvider for LibGit2 {
    fn name(&self) -> &'static str {
        "libgit2"
    }

    fn status(&self, workdir: &Path) -> Result<Vec<StatusLine>> {
        let repo = Repository::discover(workdir)?;
        ensure_worktree_root(workdir, repo.workdir().unwrap_or(repo.path()))?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(false)
            .include_ignored(false);

        let statuses = repo.statuses(Some(&mut opts))?;
        let mut lines = Vec::with_capacity(statuses.len());
        for entry in statuses.iter() {
            let Some(code) = porcelain_code(entry.status()) else {
                continue;
            };
            let path = entry.path().ok_or_else(|| Error::NonUtf8Path {
                workdir: workdir.to_path_buf(),
            })?;
            lines.push(StatusLine::new(code, path));
        }
        Ok(lines)
    }
}

/// Two-letter porcelain code for a libgit2 status, trimmed the same way the
/// porcelain parser trims lines. `None` for entries porcelain would not list.
pub fn porcelain_code(status: Status) -> Option<String> {
    if status.is_empty() || status.is_ignored() {
        return None;
    }
    if status.is_conflicted() {
        return Some("UU".to_string());
    }

    let index = if status.is_index_new() {
        'A'
    } else if status.is_index_modified() {
        'M'
    } else if status.is_index_deleted() {
        'D'
    } else if status.is_index_renamed() {
        'R'
    } else if status.is_index_typechange() {
        'T'
    } else {
        ' '
    };

    if index == ' ' && status.is_wt_new() {
        return Some("??".to_string());
    }

    let worktree = if status.is_wt_modified() {
        'M'
    } else if status.is_wt_deleted() {
        'D'
    } else if status.is_wt_renamed() {
        'R'
    } else if status.is_wt_typechange() {
        'T'
    } else {
        ' '
    };

    let code = format!("{index}{worktree}");
    let code = code.trim();
    (!code.is_empty()).then(|| code.to_string())
}
