//! Repository Path Helpers
//!
//! Repository detection and workspace root resolution.

use std::{path::PathBuf, process::Command};

use crate::errors::{GitError, PushyError, Result};

use super::runner::GitRunner;

/// Guard run before anything interactive happens: locates the `.git`
/// directory of the repository the operator is standing in.
///
/// Asks `git rev-parse --git-dir` so it works from any subdirectory of the
/// working tree. The workflow refuses to start when this fails; `init` and
/// `completions` never call it.
///
/// # Errors
/// * `GitError::RepositoryNotFound` when outside a git repository, or when
///   the reported path does not exist
/// * If the `git` executable cannot be launched
pub fn find_git_root() -> Result<PathBuf> {
    let output = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map_err(GitError::from)?;

    if output.status.success() {
        let git_root = PathBuf::from(String::from_utf8_lossy(&output.stdout).trim());

        if git_root.exists() {
            Ok(git_root)
        } else {
            Err(PushyError::Git(GitError::RepositoryNotFound))
        }
    } else {
        Err(PushyError::Git(GitError::RepositoryNotFound))
    }
}

/// Resolves the workspace root: the top level of the git working tree.
///
/// All configured subproject locations are interpreted relative to this
/// directory, so the workflow changes into it before presenting any menu.
///
/// # Errors
///
/// Returns an error if not currently in a git repository or the git command
/// fails to execute.
pub fn workspace_root(runner: &dyn GitRunner) -> Result<PathBuf> {
    let args = vec!["rev-parse".to_string(), "--show-toplevel".to_string()];
    let output = runner.run(&args).map_err(GitError::from)?;

    if output.success {
        Ok(PathBuf::from(output.stdout.trim()))
    } else {
        Err(PushyError::Git(GitError::RepositoryNotFound))
    }
}
