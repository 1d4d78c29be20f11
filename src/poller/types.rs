use std::time::Duration;

use crate::homework::Cursor;

/// Dedup and resume state for the tracked homework. Lives for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    pub cursor: Cursor,
    pub last_status_message: Option<String>,
    pub last_error_message: Option<String>,
}

impl PollState {
    pub fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            last_status_message: None,
            last_error_message: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollSettings {
    pub retry_period: Duration,
    /// Move the cursor to the response's `current_date` when no homework changed.
    pub advance_cursor_on_empty: bool,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            retry_period: Duration::from_secs(600),
            advance_cursor_on_empty: false,
        }
    }
}

/// What a single poll cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message reached the chat and the cursor moved.
    StatusDelivered,
    /// The status message matched the last delivered one.
    StatusUnchanged,
    /// The API reported no homework changes.
    NoUpdates,
    /// A new error message reached the chat.
    ErrorReported,
    /// The error message matched the last delivered one.
    ErrorSuppressed,
    /// The chat did not accept the message; state is untouched.
    DeliveryFailed,
}
