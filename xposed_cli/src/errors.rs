use std::fmt;

/// Defines the errors a CLI command can end with.
/// Details are reported to the user through `ui` before the error is returned.
#[derive(Debug, PartialEq)]
pub enum CliError {
    FileError,
    InputError,
    ValidationError,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "Could not read a file"),
            CliError::InputError => write!(f, "Invalid input"),
            CliError::ValidationError => write!(f, "Filter definitions are invalid"),
        }
    }
}

impl std::error::Error for CliError {}
