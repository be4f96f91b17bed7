//! Homework status bot binary.
//!
//! Start the bot with:
//! ```bash
//! PRACTICUM_TOKEN=xxx TELEGRAM_TOKEN=yyy TELEGRAM_CHAT_ID=123 cargo run -p homework-bot
//! ```

use std::process::ExitCode;

use homework_bot::{logging, Config, HomeworkBot};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine, the variables may come from the environment
    let _ = dotenvy::dotenv();

    let log_file = logging::log_file_from_env();
    if let Err(e) = logging::init(&log_file) {
        eprintln!("Failed to open log file {}: {}", log_file.display(), e);
        return ExitCode::FAILURE;
    }

    info!(log_file = %log_file.display(), "Bot starting");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Bot terminated");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> homework_bot::Result<()> {
    let config = Config::from_env()?;
    info!(
        chat_id = config.chat_id,
        endpoint = %config.endpoint,
        poll_interval_secs = config.poll_interval.as_secs(),
        "Configuration loaded"
    );

    let bot = HomeworkBot::new(config);

    let username = bot.get_me().await?;
    info!(username = %username, "Authorized with Telegram");

    bot.run().await
}
