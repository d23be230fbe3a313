//! Application-wide error types.
//!
//! Form validation failures are not part of this hierarchy: they are the
//! normal outcome of a submit and are handled where the form is driven.

pub use crate::config::ConfigError;

/// Main application error type.
///
/// Encompasses the failures that stop the command-line front end, with
/// automatic conversion from the module-level error types.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot or error output could not be encoded
    #[error("Output encoding error: {0}")]
    Output(#[from] serde_json::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
