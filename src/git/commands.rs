//! Porcelain Commands
//!
//! The four git operations the workflow sequences, plus the commit message
//! formatting they share. Each command checks the exit status and surfaces a
//! non-zero exit as `GitError::CommandFailed`; stdout/stderr are reported
//! as-is, never parsed.

use crate::errors::{GitError, PushyError, Result, pretty_print_error};

use super::runner::{CommandOutput, GitRunner};

/// Formats the full commit message from a commit-type tag and free text.
///
/// The wrapping double quotes are part of the returned value and therefore
/// part of the message git records, e.g. `"[FIX] typo cleanup"`.
#[must_use]
pub fn format_commit_message(commit_type: &str, message: &str) -> String {
    format!("\"[{commit_type}] {message}\"")
}

/// Stages every change in the current directory (`git add .`).
///
/// # Errors
/// * If the git command cannot be launched or exits non-zero
pub fn stage_all(runner: &dyn GitRunner, verbose: bool) -> Result<()> {
    if verbose {
        println!("Staging all changes...");
    }

    run_checked(runner, &["add", "."], verbose)
}

/// Commits the staged changes with an already-formatted message.
///
/// # Errors
/// * If the git command cannot be launched or exits non-zero (including the
///   nothing-to-commit case, which git reports as a failure)
pub fn commit(runner: &dyn GitRunner, message: &str, verbose: bool) -> Result<()> {
    if verbose {
        println!("Committing...");
    }

    run_checked(runner, &["commit", "-m", message], verbose)
}

/// Removes the current branch's upstream tracking association.
///
/// # Errors
/// * If the git command cannot be launched or exits non-zero (git fails this
///   command when no upstream is configured)
pub fn unset_upstream(runner: &dyn GitRunner, verbose: bool) -> Result<()> {
    if verbose {
        println!("Unsetting upstream tracking...");
    }

    run_checked(runner, &["branch", "--unset-upstream"], verbose)
}

/// Pushes the current branch head to origin (`git push origin HEAD`).
///
/// # Errors
/// * If the git command cannot be launched or exits non-zero
pub fn push_head(runner: &dyn GitRunner, verbose: bool) -> Result<()> {
    if verbose {
        println!("Pushing...");
    }

    run_checked(runner, &["push", "origin", "HEAD"], verbose)
}

/// Runs one git command and handles its output consistently.
fn run_checked(runner: &dyn GitRunner, args: &[&str], verbose: bool) -> Result<()> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    let output = runner.run(&args).map_err(GitError::from)?;

    handle_output(&args, &output, verbose)
}

/// Handles the captured output of a git command: prints stdout, reports and
/// propagates failures.
fn handle_output(args: &[String], output: &CommandOutput, verbose: bool) -> Result<()> {
    let command = format!("git {}", args.join(" "));

    if output.success {
        if verbose {
            println!("{command} successful!");
        }

        if !output.stdout.is_empty() {
            println!("{}", output.stdout.trim());
        }

        Ok(())
    } else {
        eprintln!("\nGit command failed: {command}");
        pretty_print_error(&output.stderr);

        Err(PushyError::Git(GitError::CommandFailed {
            command,
            output: output.stderr.trim().to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::runner::MockGitRunner;

    fn success_output() -> CommandOutput {
        CommandOutput {
            success: true,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    #[test]
    fn commit_message_wraps_type_in_brackets_and_quotes() {
        assert_eq!(
            format_commit_message("FIX", "typo cleanup"),
            "\"[FIX] typo cleanup\""
        );
        assert_eq!(
            format_commit_message("UPDATE", "additional work"),
            "\"[UPDATE] additional work\""
        );
    }

    #[test]
    fn commit_message_keeps_embedded_quotes_verbatim() {
        // Arguments never travel through a shell, so nothing is escaped.
        assert_eq!(
            format_commit_message("BUG", "fix \"quoted\" path"),
            "\"[BUG] fix \"quoted\" path\""
        );
    }

    #[test]
    fn stage_all_runs_git_add_dot() {
        let mut runner = MockGitRunner::new();
        runner
            .expect_run()
            .withf(|args| args == ["add", "."])
            .times(1)
            .returning(|_| Ok(success_output()));

        assert!(stage_all(&runner, false).is_ok());
    }

    #[test]
    fn commit_passes_the_formatted_message_as_one_argument() {
        let mut runner = MockGitRunner::new();
        runner
            .expect_run()
            .withf(|args| args == ["commit", "-m", "\"[UPDATE] additional work\""])
            .times(1)
            .returning(|_| Ok(success_output()));

        let message = format_commit_message("UPDATE", "additional work");
        assert!(commit(&runner, &message, false).is_ok());
    }

    #[test]
    fn nonzero_exit_becomes_command_failed() {
        let mut runner = MockGitRunner::new();
        runner.expect_run().returning(|_| {
            Ok(CommandOutput {
                success: false,
                stdout: String::new(),
                stderr: "fatal: no upstream configured".to_string(),
            })
        });

        let result = unset_upstream(&runner, false);

        assert!(matches!(
            result,
            Err(PushyError::Git(GitError::CommandFailed { ref command, .. }))
                if command == "git branch --unset-upstream"
        ));
    }
}
