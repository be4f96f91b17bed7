//! Outgoing messages.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::error::DeliveryError;

/// Sends a text message to a chat.
///
/// One attempt per call. Retrying is up to the caller.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError>;
}

/// [`Notifier`] backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, chat_id: i64, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(())
    }
}
