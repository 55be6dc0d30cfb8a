//! CLI-level errors

use std::path::PathBuf;

use thiserror::Error;

use crate::config::SettingsError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    InputFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("{0}")]
    Output(#[from] std::io::Error),

    #[error("{0}")]
    Config(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InputFile { .. } | CliError::Stdin(_) => exitcode::NOINPUT,
            CliError::Output(_) => exitcode::IOERR,
            CliError::Config(_) => exitcode::CONFIG,
        }
    }
}
