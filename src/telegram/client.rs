use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::*;
use crate::error::TelegramError;

/// Pushes a text message to one chat.
#[async_trait]
pub trait ChatDelivery: Send + Sync {
    async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), TelegramError>;
}

pub struct TelegramClient {
    client: Client,
    base_url: String,
    token: String,
}

impl TelegramClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }
}

#[async_trait]
impl ChatDelivery for TelegramClient {
    async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let request = SendMessageRequest {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TelegramError::Transport(e.without_url()))?;

        let status = response.status();
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse { description, .. }) => Err(TelegramError::Api {
                status: status.as_u16(),
                description: description.unwrap_or_else(|| "Unknown error".to_string()),
            }),
            None => Err(TelegramError::Api {
                status: status.as_u16(),
                description: "Unknown error".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_deliver_posts_chat_and_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .and(body_json(json!({ "chat_id": "42", "text": "привет" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": { "message_id": 1 }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = TelegramClient::new(&mock_server.uri(), "TOKEN", TIMEOUT).unwrap();
        assert_ok!(client.deliver("42", "привет").await);
    }

    #[tokio::test]
    async fn test_deliver_api_rejection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTOKEN/sendMessage"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: chat not found"
            })))
            .mount(&mock_server)
            .await;

        let client = TelegramClient::new(&mock_server.uri(), "TOKEN", TIMEOUT).unwrap();
        let result = client.deliver("missing", "hello").await;

        match result {
            Err(TelegramError::Api { status, description }) => {
                assert_eq!(status, 400);
                assert_eq!(description, "Bad Request: chat not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deliver_ok_false_with_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": false })))
            .mount(&mock_server)
            .await;

        let client = TelegramClient::new(&mock_server.uri(), "TOKEN", TIMEOUT).unwrap();
        let result = client.deliver("42", "hello").await;

        assert!(matches!(result, Err(TelegramError::Api { status: 200, .. })));
    }

    #[tokio::test]
    async fn test_deliver_connection_error() {
        let client = TelegramClient::new("http://127.0.0.1:59997", "TOKEN", TIMEOUT).unwrap();
        let result = client.deliver("42", "hello").await;

        assert!(matches!(result, Err(TelegramError::Transport(_))));
    }

    #[tokio::test]
    async fn test_transport_error_hides_bot_token() {
        let client = TelegramClient::new("http://127.0.0.1:59996", "123:SECRETTOKEN", TIMEOUT).unwrap();

        let err = assert_err!(client.deliver("42", "hello").await);

        let text = err.to_string();
        assert!(!text.contains("SECRETTOKEN"), "token leaked: {text}");
        assert!(!format!("{err:?}").contains("SECRETTOKEN"));
    }
}
