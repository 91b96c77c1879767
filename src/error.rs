use thiserror::Error;

/// Custom error types for assistiq
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation was cancelled")]
    Cancelled,

    #[error("Invalid config file: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AssistError {
    fn from(err: std::io::Error) -> Self {
        AssistError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
