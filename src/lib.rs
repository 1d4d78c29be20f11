pub mod config;
pub mod error;
pub mod homework;
pub mod poller;
pub mod practicum;
pub mod telegram;

#[cfg(test)]
mod test_helpers;

use std::sync::Arc;

use crate::config::Config;
use crate::poller::{PollSettings, PollWorker};
use crate::practicum::PracticumApiClient;
use crate::telegram::{Notifier, TelegramClient};

/// Checks credentials, builds the API clients and polls until Ctrl-C.
///
/// Returns an error only when startup fails; the poll loop itself never stops
/// on its own.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let credentials = match config.credentials() {
        Ok(credentials) => credentials,
        Err(e) => {
            tracing::error!(missing = ?e.missing, "Required credentials are missing");
            return Err(e.into());
        }
    };

    let source = Arc::new(PracticumApiClient::new(
        &config.endpoint,
        &credentials.practicum_token,
        config.request_timeout(),
    )?);
    let telegram = Arc::new(TelegramClient::new(
        &config.telegram_api_url,
        &credentials.telegram_token,
        config.request_timeout(),
    )?);

    let notifier = Notifier::new(telegram, credentials.telegram_chat_id);
    let settings = PollSettings {
        retry_period: config.retry_period(),
        advance_cursor_on_empty: config.advance_cursor_on_empty,
    };
    let worker = PollWorker::new(source, notifier, settings);

    tokio::select! {
        _ = worker.run() => {}
        signal = tokio::signal::ctrl_c() => {
            signal?;
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
