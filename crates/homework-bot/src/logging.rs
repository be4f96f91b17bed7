//! Log output: console plus an append-only log file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable with the log file path.
pub const LOG_FILE_ENV: &str = "LOG_FILE";

/// Log file used when `LOG_FILE` is not set.
pub const DEFAULT_LOG_FILE: &str = "logs/bot.log";

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "homework_bot=info,homework_models=info,teloxide=warn";

/// Log file path from the environment, or the default.
pub fn log_file_from_env() -> PathBuf {
    std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

/// Open `path` for appending, creating it and its parent directories.
pub fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init(path: &Path) -> std::io::Result<()> {
    let file = open_log_file(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_creates_parent_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("bot.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_open_bare_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bot.log");

        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
    }
}
