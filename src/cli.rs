use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::{
    config::Config,
    errors::Result,
    git::{repository::find_git_root, runner::SystemGit},
    utils::print_success,
    workflow::{self, WorkflowOptions},
};

#[derive(Subcommand)]
enum Commands {
    /// Init subcommand
    /// Creates `~/.config/pushy/config.toml` populated with the default
    /// locations, commit types and default message.
    #[command(short_flag = 'i')]
    Init,

    /// Completions subcommand
    /// Generates shell completions for the given shell.
    Completions {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser)]
#[command(about = "Interactive helper that pushes your work to a git remote:\n\
\t- Pick a subproject location and a commit type from a menu.\n\
\t- Type a commit message (or take the default).\n\
\t- It stages, commits, unsets upstream tracking and pushes.")]
#[command(author = "Tom Planche <tomplanche@proton.me>")]
#[command(help_template = "{about}\nMade by: {author}\n\nUSAGE:\n{usage}\n\n{all-args}\n")]
#[command(name = "pushy")]
pub struct Cli {
    /// Commands
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose
    /// If passed, it will print more information about each step.
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Dry run
    /// Resolve everything and print the commands without executing them.
    #[arg(short = 'n', long = "dry-run", default_value = "false")]
    dry_run: bool,

    /// Skip the location menu and use this configured location.
    #[arg(short, long, value_name = "PATH")]
    location: Option<String>,

    /// Skip the commit-type menu and use this configured commit type.
    #[arg(short = 't', long = "commit-type", value_name = "TYPE")]
    commit_type: Option<String>,

    /// Skip the message prompt and use this commit message.
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,
}

/// # `run`
/// Runs the program.
///
/// ## Errors
/// Returns an error if the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let config = Config::new()?;
            config.create_config_file()?;

            print_success(
                "Configuration file created",
                &format!("Edit {} to adjust the choice lists.", config.config_file_path().display()),
            );

            Ok(())
        }
        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "pushy", &mut io::stdout());

            Ok(())
        }
        None => {
            // Fail before anything interactive happens when run outside a
            // git repository.
            find_git_root()?;

            let settings = Config::new()?.load()?;

            let options = WorkflowOptions {
                verbose: cli.verbose,
                dry_run: cli.dry_run,
                location: cli.location,
                commit_type: cli.commit_type,
                message: cli.message,
            };

            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();

            workflow::run(&settings, &SystemGit, &mut input, &mut output, &options)
        }
    }
}
