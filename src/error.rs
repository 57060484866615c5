use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    #[error("Failed to parse answers as JSON: {0}")]
    JSONParseError(#[from] serde_json::Error),

    /// When the command has executed but finished with a non-zero status.
    #[error("Error running command: {command} ({status})")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Neither curl nor wget is installed. Cannot download the uv installer.")]
    MissingTransferTool,

    #[error("Unsupported operating system: {os}.")]
    UnsupportedOs { os: String },

    #[error("uv is not discoverable on PATH. Restart your terminal and try again.")]
    ToolNotOnPath,

    #[error("Cannot proceed: project directory '{project_dir}' already exists. Use --force to reuse it.")]
    ProjectDirectoryExistsError { project_dir: String },

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),
}

/// Convenience type alias for Results with pystrap's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code the process should terminate with for a given error.
///
/// Subprocess failures propagate the child's own exit code; every other
/// error maps to the generic failure code.
pub fn exit_code(err: &Error) -> i32 {
    match err {
        Error::CommandFailed { status, .. } => status.code().unwrap_or(exit_codes::FAILURE),
        _ => exit_codes::FAILURE,
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with the status returned by
/// [`exit_code`].
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(exit_code(&err));
}
