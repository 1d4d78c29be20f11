use std::sync::Arc;

use super::types::*;
use crate::error::PollError;
use crate::homework::{parse_status, validate_response, Cursor};
use crate::practicum::StatusSource;
use crate::telegram::Notifier;

/// Telegram rejects messages longer than 4096 characters.
const MAX_ERROR_MESSAGE_CHARS: usize = 1000;

/// Result of the fetch → validate → parse stages of one cycle.
enum Observation {
    Empty { cursor: Cursor },
    Status { message: String, cursor: Cursor },
}

/// Polls the homework API and reports status changes and failures to the chat.
pub struct PollWorker {
    source: Arc<dyn StatusSource>,
    notifier: Notifier,
    settings: PollSettings,
    state: PollState,
}

impl PollWorker {
    pub fn new(source: Arc<dyn StatusSource>, notifier: Notifier, settings: PollSettings) -> Self {
        Self {
            source,
            notifier,
            settings,
            state: PollState::new(chrono::Utc::now().timestamp()),
        }
    }

    pub fn with_state(mut self, state: PollState) -> Self {
        self.state = state;
        self
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Runs cycles forever, sleeping `retry_period` after each one.
    pub async fn run(mut self) {
        tracing::info!(
            cursor = self.state.cursor,
            retry_period_secs = self.settings.retry_period.as_secs(),
            "Poll loop started"
        );

        loop {
            let outcome = self.run_cycle().await;
            tracing::debug!(?outcome, cursor = self.state.cursor, "Poll cycle finished");
            tokio::time::sleep(self.settings.retry_period).await;
        }
    }

    /// One fetch → validate → parse → notify pass. Never fails.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        match self.observe().await {
            Ok(Observation::Empty { cursor }) => {
                if self.settings.advance_cursor_on_empty {
                    self.state.cursor = cursor;
                }
                CycleOutcome::NoUpdates
            }
            Ok(Observation::Status { message, cursor }) => self.report_status(message, cursor).await,
            Err(error) => self.report_error(error).await,
        }
    }

    async fn observe(&self) -> Result<Observation, PollError> {
        let payload = self.source.fetch(self.state.cursor).await?;
        let response = validate_response(&payload)?;

        let Some(item) = response.tracked_items.first() else {
            return Ok(Observation::Empty {
                cursor: response.cursor,
            });
        };

        if response.tracked_items.len() > 1 {
            tracing::debug!(
                count = response.tracked_items.len(),
                "Several homeworks changed, reporting only the first"
            );
        }

        Ok(Observation::Status {
            message: parse_status(item)?,
            cursor: response.cursor,
        })
    }

    async fn report_status(&mut self, message: String, cursor: Cursor) -> CycleOutcome {
        if self.state.last_status_message.as_deref() == Some(message.as_str()) {
            tracing::debug!("Homework status unchanged");
            return CycleOutcome::StatusUnchanged;
        }

        if !self.notifier.notify(&message).await {
            return CycleOutcome::DeliveryFailed;
        }

        tracing::info!(cursor, "Homework status change delivered");
        self.state.cursor = cursor;
        self.state.last_status_message = Some(message);
        CycleOutcome::StatusDelivered
    }

    async fn report_error(&mut self, error: PollError) -> CycleOutcome {
        tracing::error!(kind = error.kind(), error = %error, "Poll cycle failed");

        let message: String = format!("Сбой в работе программы: {error}")
            .chars()
            .take(MAX_ERROR_MESSAGE_CHARS)
            .collect();
        if self.state.last_error_message.as_deref() == Some(message.as_str()) {
            return CycleOutcome::ErrorSuppressed;
        }

        if !self.notifier.notify(&message).await {
            return CycleOutcome::DeliveryFailed;
        }

        self.state.last_error_message = Some(message);
        CycleOutcome::ErrorReported
    }
}
