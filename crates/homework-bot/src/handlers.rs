//! Command handlers for the Telegram bot.

use std::sync::Arc;
use std::time::Duration;

use homework_models::NO_NEW_STATUSES;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::api::PracticumClient;
use crate::poller::check_status;
use crate::state::lookback_cursor;

/// Reply to `/start`.
pub const GREETING: &str = "Привет! Я бот, который отслеживает статус проверки домашних работ.";

/// Reply to `/status` when the status could not be determined.
pub const STATUS_FAILURE: &str = "Не удалось получить статус домашних работ.";

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Приветствие")]
    Start,

    #[command(description = "Текущий статус последней работы")]
    Status,
}

/// What command handlers share. Built once at startup.
pub struct BotContext {
    /// Homework API client.
    pub client: PracticumClient,
    /// How far back `/status` looks.
    pub status_lookback: Duration,
}

impl BotContext {
    pub fn new(client: PracticumClient, status_lookback: Duration) -> Self {
        Self {
            client,
            status_lookback,
        }
    }
}

/// Handle the /start command.
pub async fn handle_start(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, GREETING).await?;
    info!(chat_id = %msg.chat.id, user = ?msg.from.as_ref().map(|u| u.id), "Received /start");
    Ok(())
}

/// Handle the /status command.
///
/// The lookup runs on its own task so the dispatcher is not held up by the API.
pub async fn handle_status(bot: Bot, msg: Message, ctx: Arc<BotContext>) -> ResponseResult<()> {
    let chat_id = msg.chat.id;
    info!(chat_id = %chat_id, user = ?msg.from.as_ref().map(|u| u.id), "Received /status");

    tokio::spawn(async move {
        let from_date = lookback_cursor(ctx.status_lookback);
        let reply = status_reply(&ctx.client, from_date).await;

        info!(chat_id = %chat_id, reply = %reply, "Answering /status");
        if let Err(e) = bot.send_message(chat_id, reply).await {
            warn!(chat_id = %chat_id, error = %e, "Failed to answer /status");
        }
    });

    Ok(())
}

/// Build the `/status` reply for statuses since `from_date`.
///
/// Never fails: every error collapses into [`STATUS_FAILURE`].
pub async fn status_reply(client: &PracticumClient, from_date: i64) -> String {
    match check_status(client, from_date).await {
        Ok(check) => check.message.unwrap_or_else(|| NO_NEW_STATUSES.to_string()),
        Err(e) => {
            warn!(error = %e, "Could not determine homework status for /status");
            STATUS_FAILURE.to_string()
        }
    }
}

/// Main command dispatcher.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => handle_start(bot, msg).await,
        Command::Status => handle_status(bot, msg, ctx).await,
    }
}
