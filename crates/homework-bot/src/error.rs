//! Error types for the homework bot.

use homework_models::{SchemaError, UnknownStatusError};
use thiserror::Error;

/// Invalid or missing configuration. Fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("required environment variable {0} is not set")]
    Missing(&'static str),

    /// `TELEGRAM_CHAT_ID` is not an integer.
    #[error("TELEGRAM_CHAT_ID must be an integer chat id, got '{0}'")]
    InvalidChatId(String),

    /// The API endpoint is not a valid URL.
    #[error("invalid PRACTICUM_ENDPOINT: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A duration setting is not a usable number of seconds.
    #[error("{key} must be a whole number of seconds, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Failure to obtain a response from the homework API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not complete.
    #[error("request to homework API failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with something other than 200.
    #[error("homework API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The body is not valid JSON.
    #[error("homework API returned malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The body is valid JSON but not an object.
    #[error("homework API returned a JSON value that is not an object")]
    NotAnObject,
}

/// A message could not be delivered.
#[derive(Debug, Error)]
#[error("failed to deliver message: {0}")]
pub struct DeliveryError(pub String);

impl From<teloxide::RequestError> for DeliveryError {
    fn from(e: teloxide::RequestError) -> Self {
        DeliveryError(e.to_string())
    }
}

/// Anything that can go wrong during one fetch-translate-notify cycle.
#[derive(Debug, Error)]
pub enum TickError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    UnknownStatus(#[from] UnknownStatusError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Top-level errors of the bot process.
#[derive(Debug, Error)]
pub enum BotError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Could not authorize with Telegram.
    #[error("failed to authorize with Telegram: {0}")]
    Authorization(String),

    /// A background task stopped although it should run forever.
    #[error("{0} stopped unexpectedly")]
    TaskExited(&'static str),

    /// A background task panicked or was cancelled.
    #[error("{task} failed: {reason}")]
    TaskFailed { task: &'static str, reason: String },

    /// Failed to install the shutdown signal handlers.
    #[error("failed to listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_error_is_transparent() {
        let err = TickError::from(UnknownStatusError::new("bogus"));
        assert_eq!(err.to_string(), "unknown homework status: bogus");

        let err = TickError::from(SchemaError::HomeworksNotList);
        assert_eq!(err.to_string(), SchemaError::HomeworksNotList.to_string());
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::Missing("PRACTICUM_TOKEN").to_string(),
            "required environment variable PRACTICUM_TOKEN is not set"
        );
        assert_eq!(
            ConfigError::InvalidChatId("abc".into()).to_string(),
            "TELEGRAM_CHAT_ID must be an integer chat id, got 'abc'"
        );
    }
}
