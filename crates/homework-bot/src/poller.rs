//! Poll loop that turns status changes into notifications.

use std::time::Duration;

use homework_models::StatusSnapshot;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::api::PracticumClient;
use crate::error::TickError;
use crate::notifier::Notifier;
use crate::state::PollState;

/// Outcome of one fetch-validate-translate pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCheck {
    /// Message for the tracked submission, `None` when the list was empty.
    pub message: Option<String>,
    /// Server time reported by the API.
    pub current_date: Option<i64>,
}

/// Fetch statuses since `from_date` and translate the latest one.
pub async fn check_status(client: &PracticumClient, from_date: i64) -> Result<StatusCheck, TickError> {
    let response = client.fetch(from_date).await?;
    let snapshot = StatusSnapshot::from_json(&response)?;

    let message = match snapshot.latest() {
        Some(record) => Some(record.status_message()?),
        None => None,
    };

    Ok(StatusCheck {
        message,
        current_date: snapshot.current_date,
    })
}

/// What a single tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new message was delivered.
    Notified(String),
    /// The message equals the last delivered one.
    Unchanged,
    /// The API reported no homework.
    NoNewStatuses,
}

/// Periodically checks the tracked submission and notifies on change.
pub struct StatusPoller<N> {
    client: PracticumClient,
    notifier: N,
    chat_id: i64,
    poll_interval: Duration,
    state: PollState,
}

impl<N: Notifier> StatusPoller<N> {
    /// Create a poller that starts from `cursor`.
    pub fn new(
        client: PracticumClient,
        notifier: N,
        chat_id: i64,
        poll_interval: Duration,
        cursor: i64,
    ) -> Self {
        Self {
            client,
            notifier,
            chat_id,
            poll_interval,
            state: PollState::new(cursor),
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Run one poll tick.
    ///
    /// The cursor moves to the response's `current_date` only when the tick
    /// ends without error, so a failed delivery is fetched and retried on the
    /// next tick. The last sent message only changes after a successful send.
    pub async fn tick(&mut self) -> Result<TickOutcome, TickError> {
        let check = check_status(&self.client, self.state.cursor()).await?;

        let outcome = match check.message {
            None => {
                info!("No new statuses");
                TickOutcome::NoNewStatuses
            }
            Some(message) if !self.state.should_notify(&message) => {
                debug!("Status unchanged, nothing to send");
                TickOutcome::Unchanged
            }
            Some(message) => {
                self.notifier.send(self.chat_id, &message).await?;
                info!(chat_id = self.chat_id, message = %message, "Notification sent");

                self.state.record_sent(message.clone());
                TickOutcome::Notified(message)
            }
        };

        if let Some(current_date) = check.current_date {
            self.state.advance(current_date);
        }

        Ok(outcome)
    }

    /// Poll forever. The first tick runs immediately.
    pub async fn run(mut self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            poll_interval_secs = self.poll_interval.as_secs(),
            cursor = self.state.cursor(),
            "Starting status poller"
        );

        loop {
            ticker.tick().await;

            if let Err(e) = self.tick().await {
                log_tick_error(&e);
            }
        }
    }
}

fn log_tick_error(e: &TickError) {
    match e {
        TickError::Fetch(e) => error!(error = %e, "Failed to fetch homework statuses"),
        TickError::Schema(e) => error!(error = %e, "Unexpected homework API response"),
        TickError::UnknownStatus(e) => error!(error = %e, "Failed to translate homework status"),
        TickError::Delivery(e) => warn!(error = %e, "Failed to send notification"),
    }
}
