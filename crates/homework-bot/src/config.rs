//! Bot configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! Required:
//! - `PRACTICUM_TOKEN`: OAuth token for the homework API
//! - `TELEGRAM_TOKEN`: Bot token from @BotFather
//! - `TELEGRAM_CHAT_ID`: Chat that receives status notifications
//!
//! Optional:
//! - `PRACTICUM_ENDPOINT`: API endpoint (default: Practicum `homework_statuses`)
//! - `POLL_INTERVAL_SECS`: Delay between polls, 1 s to one week (default: 600)
//! - `STATUS_LOOKBACK_SECS`: How far back the first poll and `/status` look (default: 3600)

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

pub const PRACTICUM_TOKEN_ENV: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";
pub const ENDPOINT_ENV: &str = "PRACTICUM_ENDPOINT";
pub const POLL_INTERVAL_ENV: &str = "POLL_INTERVAL_SECS";
pub const STATUS_LOOKBACK_ENV: &str = "STATUS_LOOKBACK_SECS";

/// Homework status endpoint of the Practicum API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Default delay between polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Longest accepted poll interval.
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(7 * 24 * 3600);

/// Default lookback for the first poll and for `/status`.
pub const DEFAULT_STATUS_LOOKBACK: Duration = Duration::from_secs(3600);

/// Runtime configuration of the bot.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat that receives notifications from the poll loop.
    pub chat_id: i64,
    /// Homework status endpoint.
    pub endpoint: Url,
    /// Delay between poll ticks.
    pub poll_interval: Duration,
    /// Offset subtracted from "now" when no cursor is known yet.
    pub status_lookback: Duration,
}

impl Config {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    ///
    /// Empty or whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let practicum_token = required(PRACTICUM_TOKEN_ENV)?;
        let telegram_token = required(TELEGRAM_TOKEN_ENV)?;
        let chat_id_raw = required(TELEGRAM_CHAT_ID_ENV)?;
        let chat_id = chat_id_raw
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidChatId(chat_id_raw.clone()))?;

        let endpoint = Url::parse(get(ENDPOINT_ENV).as_deref().unwrap_or(DEFAULT_ENDPOINT))?;

        let seconds = |key: &'static str, default: Duration| match get(key) {
            Some(value) => value
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidNumber { key, value }),
            None => Ok(default),
        };

        let poll_interval = seconds(POLL_INTERVAL_ENV, DEFAULT_POLL_INTERVAL)?;
        if poll_interval.is_zero() || poll_interval > MAX_POLL_INTERVAL {
            return Err(ConfigError::InvalidNumber {
                key: POLL_INTERVAL_ENV,
                value: poll_interval.as_secs().to_string(),
            });
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
            endpoint,
            poll_interval,
            status_lookback: seconds(STATUS_LOOKBACK_ENV, DEFAULT_STATUS_LOOKBACK)?,
        })
    }
}

// Tokens stay out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("endpoint", &self.endpoint.as_str())
            .field("poll_interval", &self.poll_interval)
            .field("status_lookback", &self.status_lookback)
            .finish()
    }
}
