//! Telegram bot that relays homework review statuses.
//!
//! The bot polls the Practicum `homework_statuses` API on a fixed interval
//! and sends a message to one chat whenever the status of the latest
//! submission changes. It also answers two commands.
//!
//! # Environment Variables
//!
//! Required:
//! - `PRACTICUM_TOKEN`: OAuth token for the homework API
//! - `TELEGRAM_TOKEN`: Bot token from @BotFather
//! - `TELEGRAM_CHAT_ID`: Chat that receives notifications
//!
//! See [`config`] and [`logging`] for the optional ones.
//!
//! # Commands
//!
//! - `/start` - Greeting
//! - `/status` - Current status of the latest submission

pub mod api;
pub mod bot;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod notifier;
pub mod poller;
pub mod state;

pub use api::PracticumClient;
pub use bot::HomeworkBot;
pub use config::Config;
pub use error::{BotError, ConfigError, DeliveryError, FetchError, Result, TickError};
pub use handlers::{BotContext, Command};
pub use notifier::{Notifier, TelegramNotifier};
pub use poller::{check_status, StatusCheck, StatusPoller, TickOutcome};
pub use state::PollState;
