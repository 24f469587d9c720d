//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use abls::Error as LibError;
use std::fmt;

/// Message printed when `-d` and `-f` are combined.
pub const CONFLICTING_FILTERS: &str = "-d and -f cannot be activated at the same time";

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments; help is printed after the message.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Every failure exits with 1. Parse errors never reach this type;
    /// clap exits with 2 for those.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(_) | CliError::InvalidArguments(_) | CliError::Io(_) => 1,
        }
    }

    /// Whether the usage text should follow the message.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::InvalidArguments(_))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "{msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::InvalidArguments(_) => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        if matches!(e, LibError::ConflictingFilters) {
            CliError::InvalidArguments(CONFLICTING_FILTERS.to_string())
        } else {
            CliError::Library(e)
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
