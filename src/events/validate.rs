use serde_json::Value;

use crate::error::ValidationError;
use crate::events::draft::EventDraft;
use crate::events::record::EventRecord;

pub fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// The typed name is required even when the payload carries its own `event`,
/// and the merged `event` must still be a non-empty string.
pub fn validate(draft: &EventDraft, record: &EventRecord) -> Result<(), ValidationError> {
    if !draft.event_name.is_empty() && is_non_empty_string(record.event()) {
        Ok(())
    } else {
        Err(ValidationError::MissingEventName)
    }
}
