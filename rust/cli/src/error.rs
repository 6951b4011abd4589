//! Error types for the CLI application.

use std::fmt;

use holdem_ai::PolicyError;
use holdem_engine::errors::GameError;

use crate::config::ConfigError;

/// Everything a command can fail with. [`crate::run`] turns `Interrupted`
/// into exit code 130 and the rest into 2.
#[derive(Debug)]
pub enum CliError {
    /// Terminal or record-file I/O
    Io(std::io::Error),
    /// Bad cards, table sizes or paths given on the command line
    InvalidInput(String),
    /// Unreadable or out-of-range settings
    Config(String),
    /// A round could not be played or chips went missing
    Engine(String),
    /// The run was cut short; partial output was kept
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

impl From<PolicyError> for CliError {
    fn from(error: PolicyError) -> Self {
        CliError::Engine(error.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_errors_keep_their_message() {
        let e: CliError = GameError::DeckExhausted.into();
        assert_eq!(e.to_string(), "Engine error: Deck exhausted");
    }

    #[test]
    fn io_errors_expose_their_source() {
        use std::error::Error;
        let e: CliError = std::io::Error::other("pipe closed").into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "I/O error: pipe closed");
    }
}
