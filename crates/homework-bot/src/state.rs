//! State of the poll loop.

use std::time::Duration;

use chrono::Utc;

/// Unix timestamp `lookback` before now, used when no cursor is known yet.
pub fn lookback_cursor(lookback: Duration) -> i64 {
    let lookback = i64::try_from(lookback.as_secs()).unwrap_or(i64::MAX);
    Utc::now().timestamp().saturating_sub(lookback)
}

/// What the poll loop remembers between ticks.
///
/// Owned by the poll task alone; nothing else reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` for the next request.
    cursor: i64,
    /// Last message that was delivered successfully.
    last_sent: Option<String>,
}

impl PollState {
    /// Create a state that starts polling from `cursor`.
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            last_sent: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Move the cursor to the server time of the latest response.
    pub fn advance(&mut self, current_date: i64) {
        self.cursor = current_date;
    }

    /// Whether `message` differs from what was last delivered.
    pub fn should_notify(&self, message: &str) -> bool {
        self.last_sent.as_deref() != Some(message)
    }

    /// Remember a delivered message. Call only after the send succeeded.
    pub fn record_sent(&mut self, message: impl Into<String>) {
        self.last_sent = Some(message.into());
    }
}
