//! Git Subprocess Runner
//!
//! The single seam between the workflow and the `git` executable. Keeping it
//! behind a trait lets the workflow tests script exit codes and outputs
//! without a repository.

use std::process::Command;

#[cfg(test)]
use mockall::automock;

/// Captured result of one git invocation.
///
/// A deliberately small domain type instead of `std::process::Output`: the
/// workflow only ever looks at success, stdout and stderr, and this is
/// trivially constructible in tests on any platform.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `git` with an argument vector and captures its output.
///
/// Every invocation blocks until the subprocess exits. Arguments are passed
/// verbatim to the process, never through a shell, so no quoting or escaping
/// is applied anywhere above this trait.
#[cfg_attr(test, automock)]
pub trait GitRunner {
    /// Executes `git <args>` and captures the result.
    ///
    /// # Errors
    /// * If the `git` executable cannot be launched at all
    fn run(&self, args: &[String]) -> std::io::Result<CommandOutput>;
}

/// The real runner: spawns the `git` binary found on `PATH`.
pub struct SystemGit;

impl GitRunner for SystemGit {
    fn run(&self, args: &[String]) -> std::io::Result<CommandOutput> {
        let output = Command::new("git").args(args).output()?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
