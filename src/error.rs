use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents validation failures in user input
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Cannot proceed: project directory '{project_dir}' already exists.")]
    ProjectDirectoryExistsError { project_dir: String },

    /// When the package manager could not be started at all.
    #[error("Failed to start package manager '{program}'. Original error: {source}")]
    InstallerSpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// When the package manager has executed but finished with an error.
    #[error("Package installation '{command}' failed with status: {status}. Project files were kept.")]
    InstallError { command: String, status: ExitStatus },
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
