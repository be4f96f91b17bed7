//! Bot assembly: poll loop, command dispatcher and shutdown handling.

use std::sync::Arc;

use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use tokio::task::JoinError;
use tracing::{debug, info};

use crate::api::PracticumClient;
use crate::config::Config;
use crate::error::{BotError, Result};
use crate::handlers::{handle_command, BotContext, Command};
use crate::notifier::TelegramNotifier;
use crate::poller::StatusPoller;
use crate::state::lookback_cursor;

/// The homework status bot.
pub struct HomeworkBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Homework API client, shared by the poller and `/status`.
    client: PracticumClient,
    config: Config,
}

impl HomeworkBot {
    /// Create the bot from a loaded configuration.
    pub fn new(config: Config) -> Self {
        let bot = Bot::new(config.telegram_token.clone());
        let client = PracticumClient::new(config.endpoint.clone(), config.practicum_token.clone());

        Self { bot, client, config }
    }

    /// Get the bot's username. Also verifies the token.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Authorization(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Run until SIGINT/SIGTERM.
    ///
    /// Returns an error if the poller or the dispatcher stops on its own.
    pub async fn run(self) -> Result<()> {
        let poller = StatusPoller::new(
            self.client.clone(),
            TelegramNotifier::new(self.bot.clone()),
            self.config.chat_id,
            self.config.poll_interval,
            lookback_cursor(self.config.status_lookback),
        );
        let mut poll_task = tokio::spawn(poller.run());

        let ctx = Arc::new(BotContext::new(self.client.clone(), self.config.status_lookback));

        let handler = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                let ctx = Arc::clone(&ctx);
                async move { handle_command(bot, msg, cmd, ctx).await }
            });

        let mut dispatcher = Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                debug!(update_id = ?upd.id, "Ignoring update");
            })
            .build();

        info!("Bot is running! Send /start to begin.");

        tokio::select! {
            signal = shutdown_signal() => {
                signal.map_err(BotError::Signal)?;
                info!("Shutdown signal received, bot stopped");
                Ok(())
            }
            joined = &mut poll_task => Err(task_failure("status poller", joined)),
            _ = dispatcher.dispatch() => Err(BotError::TaskExited("update dispatcher")),
        }
    }
}

fn task_failure(task: &'static str, joined: std::result::Result<(), JoinError>) -> BotError {
    match joined {
        Ok(()) => BotError::TaskExited(task),
        Err(e) => BotError::TaskFailed {
            task,
            reason: e.to_string(),
        },
    }
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_task_failure_reports_panics() {
        let handle: tokio::task::JoinHandle<()> = tokio::spawn(async { panic!("boom") });
        let err = task_failure("status poller", handle.await);

        assert!(matches!(err, BotError::TaskFailed { task: "status poller", .. }));
        assert!(err.to_string().starts_with("status poller failed"));
    }

    #[test]
    fn test_task_failure_on_clean_exit() {
        let err = task_failure("status poller", Ok(()));
        assert_eq!(err.to_string(), "status poller stopped unexpectedly");
    }
}
