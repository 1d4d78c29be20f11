use std::sync::Arc;

use super::client::ChatDelivery;

/// Sends messages to the configured chat and reports whether they arrived.
pub struct Notifier {
    delivery: Arc<dyn ChatDelivery>,
    chat_id: String,
}

impl Notifier {
    pub fn new(delivery: Arc<dyn ChatDelivery>, chat_id: impl Into<String>) -> Self {
        Self {
            delivery,
            chat_id: chat_id.into(),
        }
    }

    /// Returns `false` on any delivery failure. Never propagates the error.
    pub async fn notify(&self, message: &str) -> bool {
        match self.delivery.deliver(&self.chat_id, message).await {
            Ok(()) => {
                tracing::debug!(text = message, "Message sent");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to send message");
                false
            }
        }
    }
}
