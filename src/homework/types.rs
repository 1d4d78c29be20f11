use serde_json::Value;

/// Unix timestamp (seconds) from which the next fetch resumes.
pub type Cursor = i64;

pub const HOMEWORKS_KEY: &str = "homeworks";
pub const CURRENT_DATE_KEY: &str = "current_date";
pub const HOMEWORK_NAME_KEY: &str = "homework_name";
pub const STATUS_KEY: &str = "status";

/// One homework record as returned by the API.
///
/// Kept as raw JSON; the parser decides whether the record is usable.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedItem {
    raw: Value,
}

impl TrackedItem {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn name(&self) -> Option<&str> {
        self.raw.get(HOMEWORK_NAME_KEY).and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        self.raw.get(STATUS_KEY).and_then(Value::as_str)
    }

    pub fn is_record(&self) -> bool {
        self.raw.is_object()
    }
}

/// A payload that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub tracked_items: Vec<TrackedItem>,
    pub cursor: Cursor,
}
