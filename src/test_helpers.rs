#[cfg(test)]
pub mod mocks {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::Value;

    use crate::error::{PollError, TelegramError};
    use crate::homework::Cursor;
    use crate::practicum::StatusSource;
    use crate::telegram::ChatDelivery;

    /// Replays scripted fetch results. The last one repeats forever.
    pub struct MockStatusSource {
        responses: Mutex<VecDeque<Result<Value, PollError>>>,
        pub requested: Mutex<Vec<Cursor>>,
    }

    impl MockStatusSource {
        pub fn new(responses: Vec<Result<Value, PollError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn requested(&self) -> Vec<Cursor> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl StatusSource for MockStatusSource {
        async fn fetch(&self, from_date: Cursor) -> Result<Value, PollError> {
            self.requested.lock().unwrap().push(from_date);
            let mut responses = self.responses.lock().unwrap();
            if responses.len() > 1 {
                responses.pop_front().unwrap()
            } else {
                responses
                    .front()
                    .cloned()
                    .unwrap_or_else(|| Err(PollError::Connection("Mock: no response".to_string())))
            }
        }
    }

    /// Records delivery attempts. Success can be switched between cycles.
    pub struct MockChatDelivery {
        should_succeed: AtomicBool,
        attempts: Mutex<Vec<(String, String)>>,
        sent: Mutex<Vec<(String, String)>>,
    }

    impl MockChatDelivery {
        pub fn new(should_succeed: bool) -> Self {
            Self {
                should_succeed: AtomicBool::new(should_succeed),
                attempts: Mutex::new(Vec::new()),
                sent: Mutex::new(Vec::new()),
            }
        }

        pub fn set_should_succeed(&self, should_succeed: bool) {
            self.should_succeed.store(should_succeed, Ordering::SeqCst);
        }

        pub fn attempts(&self) -> usize {
            self.attempts.lock().unwrap().len()
        }

        pub fn sent(&self) -> Vec<(String, String)> {
            self.sent.lock().unwrap().clone()
        }

        pub fn sent_texts(&self) -> Vec<String> {
            self.sent().into_iter().map(|(_, text)| text).collect()
        }
    }

    #[async_trait]
    impl ChatDelivery for MockChatDelivery {
        async fn deliver(&self, chat_id: &str, text: &str) -> Result<(), TelegramError> {
            let entry = (chat_id.to_string(), text.to_string());
            self.attempts.lock().unwrap().push(entry.clone());
            if self.should_succeed.load(Ordering::SeqCst) {
                self.sent.lock().unwrap().push(entry);
                Ok(())
            } else {
                Err(TelegramError::Api {
                    status: 502,
                    description: "Mock: Failed to deliver".to_string(),
                })
            }
        }
    }
}
