//! Push Workflow
//!
//! The fixed sequence behind a plain `pushy` invocation: resolve the
//! workspace root, ask where to push, ask which kind of commit this is, ask
//! for a message, then stage, commit, unset upstream tracking and push.
//! Every step blocks; the first failing step aborts the rest. Nothing is
//! rolled back on failure - git is left exactly as the failed command left
//! it, the same as running the commands by hand.

use std::{
    env,
    io::{BufRead, Write},
};

use crate::{
    config::Settings,
    errors::{PushyError, Result},
    git::{
        commands::{commit, format_commit_message, push_head, stage_all, unset_upstream},
        repository::workspace_root,
        runner::GitRunner,
    },
    prompt::{InputSpec, MenuSpec, read_line, show_menu},
    utils::{print_success, to_os_path},
};

/// Per-invocation options, straight from the CLI.
///
/// The three `Option` fields are non-interactive overrides: when set, the
/// corresponding prompt is skipped entirely.
#[derive(Debug, Default)]
pub struct WorkflowOptions {
    pub verbose: bool,
    pub dry_run: bool,
    pub location: Option<String>,
    pub commit_type: Option<String>,
    pub message: Option<String>,
}

/// Runs the whole push workflow.
///
/// # Errors
/// * If the workspace root cannot be resolved
/// * If a prompt fails (empty choice list, closed input stream)
/// * If an override is not one of the configured choices
/// * If changing into the chosen location fails
/// * If any git command cannot be launched or exits non-zero
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    runner: &dyn GitRunner,
    input: &mut R,
    output: &mut W,
    options: &WorkflowOptions,
) -> Result<()> {
    let root = workspace_root(runner)?;

    if options.verbose {
        writeln!(output, "Workspace root: {}", root.display())?;
    }

    let location = resolve_location(settings, input, output, options)?;
    let commit_type = resolve_commit_type(settings, input, output, options)?;
    let message = resolve_message(settings, input, output, options)?;

    let full_message = format_commit_message(&commit_type, &message);
    let target = root.join(&location);

    if options.dry_run {
        writeln!(output, "Dry run - nothing will be executed")?;
        writeln!(output, "  cd {}", target.display())?;
        writeln!(output, "  git add .")?;
        writeln!(output, "  git commit -m {full_message}")?;
        writeln!(output, "  git branch --unset-upstream")?;
        writeln!(output, "  git push origin HEAD")?;

        return Ok(());
    }

    // All four git commands below run relative to the chosen location.
    env::set_current_dir(&target)?;

    stage_all(runner, options.verbose)?;
    commit(runner, &full_message, options.verbose)?;
    unset_upstream(runner, options.verbose)?;
    push_head(runner, options.verbose)?;

    print_success(
        &format!("Pushed {location} to origin HEAD"),
        &format!("Commit message: {full_message}"),
    );

    Ok(())
}

/// Picks the target location: the CLI override if given, the menu otherwise.
/// Paths are rendered with the host OS separator before display.
fn resolve_location<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    output: &mut W,
    options: &WorkflowOptions,
) -> Result<String> {
    let choices: Vec<String> = settings.locations.iter().map(|l| to_os_path(l)).collect();

    if let Some(location) = &options.location {
        let normalized = to_os_path(location);

        if choices.contains(&normalized) {
            return Ok(normalized);
        }

        return Err(PushyError::InvalidInput(format!(
            "'{location}' is not a configured location"
        )));
    }

    let menu = MenuSpec::new("choose a location to push to git remote", choices);
    show_menu(&menu, input, output)
}

/// Picks the commit-type tag: the CLI override if given, the menu otherwise.
fn resolve_commit_type<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    output: &mut W,
    options: &WorkflowOptions,
) -> Result<String> {
    if let Some(commit_type) = &options.commit_type {
        if settings.commit_types.contains(commit_type) {
            return Ok(commit_type.clone());
        }

        return Err(PushyError::InvalidInput(format!(
            "'{commit_type}' is not a configured commit type"
        )));
    }

    let menu = MenuSpec::new("choose the commit type", settings.commit_types.clone());
    show_menu(&menu, input, output)
}

/// Reads the commit message, falling back to the configured default when the
/// operator submits an empty line.
fn resolve_message<R: BufRead, W: Write>(
    settings: &Settings,
    input: &mut R,
    output: &mut W,
    options: &WorkflowOptions,
) -> Result<String> {
    if let Some(message) = &options.message {
        return Ok(message.clone());
    }

    let spec = InputSpec::new(["Enter your commit msg:"], settings.default_message.clone());
    read_line(&spec, input, output)
}
