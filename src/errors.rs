use thiserror::Error;

/// Main error type for the Pushy application
#[derive(Error, Debug)]
pub enum PushyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error while accessing config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file already exists - edit it directly to change settings")]
    ConfigAlreadyExists,

    #[error("Invalid configuration format - please check your config.toml syntax: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Could not determine home directory - please set HOME environment variable")]
    HomeDirNotFound,
}

/// Git-related errors
#[derive(Error, Debug)]
pub enum GitError {
    #[error("IO error during git operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Not in a git repository - please run this command from within a git repository")]
    RepositoryNotFound,

    #[error("Git command failed: {command}\nOutput: {output}")]
    CommandFailed { command: String, output: String },
}

/// Interactive prompt errors
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Menu has no choices to display")]
    EmptyChoices,

    #[error("Input stream closed before a value was read")]
    EndOfInput,

    #[error("IO error during prompt: {0}")]
    IoError(#[from] std::io::Error),
}

/// Type alias for Result using `PushyError`
pub type Result<T> = std::result::Result<T, PushyError>;

/// Prints a multi-line error message (typically git stderr) indented for
/// readability on the operator's terminal.
pub fn pretty_print_error(message: &str) {
    for line in message.lines() {
        if line.trim().is_empty() {
            continue;
        }
        eprintln!("  {line}");
    }
}
