pub mod guard;

pub use guard::verify_credentials;

use std::time::Duration;

use clap::builder::FalseyValueParser;
use clap::Parser;

use crate::error::MissingCredentialError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Runtime configuration. Every value can come from a flag or the environment.
///
/// The three credentials are optional at the parser level so that
/// [`Config::credentials`] can report all missing ones together.
#[derive(Debug, Clone, Parser)]
#[command(name = "homework-bot", about = "Reports Practicum homework review status changes to Telegram")]
pub struct Config {
    /// Practicum API OAuth token
    #[arg(long, env = "PRACTICUM_TOKEN", hide_env_values = true)]
    pub practicum_token: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat that receives notifications
    #[arg(long, env = "TELEGRAM_CHAT_ID")]
    pub telegram_chat_id: Option<String>,

    /// Seconds to sleep between polls
    #[arg(long, env = "RETRY_PERIOD_SECS", default_value = "600")]
    pub retry_period_secs: u64,

    /// Homework status endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Telegram Bot API base URL
    #[arg(long, env = "TELEGRAM_API_URL", default_value = DEFAULT_TELEGRAM_API_URL)]
    pub telegram_api_url: String,

    /// Per-request HTTP timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// Move the cursor forward when the API reports no homework updates
    #[arg(long, env = "ADVANCE_CURSOR_ON_EMPTY", value_parser = FalseyValueParser::new())]
    pub advance_cursor_on_empty: bool,
}

/// Credentials that passed the startup check.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

impl Config {
    pub fn credentials(&self) -> Result<Credentials, MissingCredentialError> {
        verify_credentials(&[
            ("PRACTICUM_TOKEN", self.practicum_token.as_deref()),
            ("TELEGRAM_TOKEN", self.telegram_token.as_deref()),
            ("TELEGRAM_CHAT_ID", self.telegram_chat_id.as_deref()),
        ])?;

        Ok(Credentials {
            practicum_token: self.practicum_token.clone().unwrap_or_default(),
            telegram_token: self.telegram_token.clone().unwrap_or_default(),
            telegram_chat_id: self.telegram_chat_id.clone().unwrap_or_default(),
        })
    }

    pub fn retry_period(&self) -> Duration {
        Duration::from_secs(self.retry_period_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
