//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`] maps
//! the variants to exit codes.

use eights_engine::errors::{GameError, MoveError};
use std::fmt;

/// Everything a command can fail with.
#[derive(Debug)]
pub enum CliError {
    /// Reading or writing a file or one of the standard streams failed
    Io(std::io::Error),

    /// Input that no command can work with, such as a missing log file
    InvalidInput(String),

    /// Bad configuration layer or unknown AI name
    Config(String),

    /// The engine reported a broken invariant
    Engine(String),

    /// Standard input ended while a game was still running
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error.to_string())
    }
}

// Only fatal move errors should reach `?`; rejections are shown and re-prompted.
impl From<MoveError> for CliError {
    fn from(error: MoveError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<crate::config::ConfigError> for CliError {
    fn from(error: crate::config::ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_convert() {
        let e: CliError = GameError::GameOver.into();
        assert!(matches!(e, CliError::Engine(_)));
        assert!(e.to_string().starts_with("Engine error:"));

        let e: CliError = MoveError::RoundOver.into();
        assert!(matches!(e, CliError::Engine(_)));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("disk full").into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "I/O error: disk full");
    }
}
