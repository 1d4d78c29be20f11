use super::types::TrackedItem;
use super::verdict::verdict_for;
use crate::error::PollError;

/// Builds the chat notification for one homework record.
pub fn parse_status(item: &TrackedItem) -> Result<String, PollError> {
    if !item.is_record() {
        return Err(PollError::MalformedItem(
            "данные о домашней работе не являются словарём".to_string(),
        ));
    }

    let (name, status) = match (item.name(), item.status()) {
        (Some(name), Some(status)) => (name, status),
        _ => {
            return Err(PollError::MalformedItem(
                "отсутствует название или статус домашней работы".to_string(),
            ))
        }
    };

    let verdict = verdict_for(status).ok_or_else(|| PollError::UnknownStatus(status.to_string()))?;

    Ok(format!("Изменился статус проверки работы \"{name}\". {verdict}"))
}
