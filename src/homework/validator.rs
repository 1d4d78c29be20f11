use serde_json::Value;

use super::types::*;
use crate::error::PollError;

/// Structural checks on a raw API payload.
///
/// An empty `homeworks` list is valid. Items are passed through untouched.
pub fn validate_response(payload: &Value) -> Result<FetchResponse, PollError> {
    let map = payload
        .as_object()
        .ok_or_else(|| PollError::MalformedResponse("ответ API должен быть словарём".to_string()))?;

    let (homeworks, current_date) = match (map.get(HOMEWORKS_KEY), map.get(CURRENT_DATE_KEY)) {
        (Some(homeworks), Some(current_date)) => (homeworks, current_date),
        _ => {
            return Err(PollError::MalformedResponse(format!(
                "в ответе API отсутствуют ключи \"{}\" и \"{}\"",
                HOMEWORKS_KEY, CURRENT_DATE_KEY
            )))
        }
    };

    let items = homeworks.as_array().ok_or_else(|| {
        PollError::MalformedResponse(format!("ключ \"{}\" должен содержать список", HOMEWORKS_KEY))
    })?;

    let cursor = current_date.as_i64().ok_or_else(|| {
        PollError::MalformedResponse(format!("ключ \"{}\" должен содержать число", CURRENT_DATE_KEY))
    })?;

    if items.is_empty() {
        tracing::debug!("No new homework in API response");
    }

    Ok(FetchResponse {
        tracked_items: items.iter().cloned().map(TrackedItem::new).collect(),
        cursor,
    })
}
