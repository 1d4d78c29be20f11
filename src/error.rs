use thiserror::Error;

/// Required configuration values absent at startup. Lists every missing name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Отсутствуют обязательные переменные окружения: {}. Программа не может продолжать работу.", .missing.join(", "))]
pub struct MissingCredentialError {
    pub missing: Vec<&'static str>,
}

/// Failures that end a single poll cycle. None of them stop the loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PollError {
    #[error("Ошибка при запросе к API: {0}")]
    Connection(String),

    #[error("Ошибка {status} при запросе к API: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Ошибка при расшифровке JSON: {0}")]
    Decode(String),

    #[error("Некорректный ответ API: {0}")]
    MalformedResponse(String),

    #[error("Некорректные данные о домашней работе: {0}")]
    MalformedItem(String),

    #[error("Неизвестный статус домашней работы: {0}")]
    UnknownStatus(String),
}

impl PollError {
    /// Short machine-friendly tag used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            PollError::Connection(_) => "connection",
            PollError::HttpStatus { .. } => "http_status",
            PollError::Decode(_) => "decode",
            PollError::MalformedResponse(_) => "malformed_response",
            PollError::MalformedItem(_) => "malformed_item",
            PollError::UnknownStatus(_) => "unknown_status",
        }
    }
}

/// Failures from the Telegram Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// The request URL carries the bot token, so it is stripped before wrapping.
    #[error("telegram request failed: {0}")]
    Transport(reqwest::Error),

    #[error("telegram rejected message ({status}): {description}")]
    Api { status: u16, description: String },
}
