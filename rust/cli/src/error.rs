//! Error types for the CLI application.
//!
//! Engine errors arrive as `GameError`/`ConfigError` and are folded into
//! [`CliError`] so command handlers can use `?` throughout.

use std::fmt;

use farkell_engine::errors::{ConfigError, GameError};

/// Custom error type for CLI operations.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),

    /// The player quit, or input ended, before the game was over
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

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error {
            GameError::Aborted(msg) => CliError::Interrupted(msg),
            GameError::Config(e) => e.into(),
            GameError::Observer(msg) => CliError::Io(std::io::Error::other(msg)),
            other => CliError::Engine(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aborted_game_is_an_interruption() {
        let e: CliError = GameError::Aborted("quit".into()).into();
        assert!(matches!(e, CliError::Interrupted(ref m) if m == "quit"));
    }

    #[test]
    fn test_config_errors_keep_their_message() {
        let e: CliError = GameError::Config(ConfigError::NoPlayers).into();
        assert_eq!(
            e.to_string(),
            "Configuration error: Game needs at least one player"
        );
    }

    #[test]
    fn test_protocol_errors_are_engine_errors() {
        let e: CliError = GameError::DecisionShape {
            expected: 2,
            actual: 1,
        }
        .into();
        assert!(matches!(e, CliError::Engine(_)));
    }

    #[test]
    fn test_observer_failures_are_io_errors() {
        let e: CliError = GameError::Observer("disk full".into()).into();
        assert!(matches!(e, CliError::Io(ref io) if io.to_string() == "disk full"));
    }
}
