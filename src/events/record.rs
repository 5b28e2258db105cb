use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PayloadError;
use crate::events::draft::EventDraft;

pub const EVENT_KEY: &str = "event";

/// A merged event object, ready to be pushed onto the queue.
///
/// Keys keep insertion order, so `event` is always listed first even when the
/// payload overrides its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventRecord(Map<String, Value>);

impl EventRecord {
    /// The payload-less record: `{ "event": name }`.
    pub fn named(name: &str) -> Self {
        let mut map = Map::new();
        map.insert(EVENT_KEY.to_string(), Value::String(name.to_string()));
        Self(map)
    }

    /// Parses the draft payload and merges it over the named base record.
    /// A payload `event` key wins over the draft's event name.
    pub fn from_draft(draft: &EventDraft) -> Result<Self, PayloadError> {
        let payload = parse_payload(&draft.event_payload)?;
        let mut record = Self::named(&draft.event_name);
        record.merge(payload);
        Ok(record)
    }

    fn merge(&mut self, payload: Map<String, Value>) {
        for (key, value) in payload {
            self.0.insert(key, value);
        }
    }

    pub fn event(&self) -> Option<&Value> {
        self.0.get(EVENT_KEY)
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    // a string-keyed JSON map always serializes
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn compact(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<EventRecord> for Value {
    fn from(record: EventRecord) -> Self {
        Value::Object(record.0)
    }
}

fn parse_payload(raw: &str) -> Result<Map<String, Value>, PayloadError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(PayloadError::NotAnObject(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(name: &str, payload: &str) -> Result<EventRecord, PayloadError> {
        EventRecord::from_draft(&EventDraft::new(name, payload))
    }

    #[test]
    fn merges_payload_after_event_name() {
        let record = build("Pageview", r#"{"indication":"cough"}"#).unwrap();
        assert_eq!(record.to_value(), json!({"event": "Pageview", "indication": "cough"}));
    }

    #[test]
    fn payload_event_key_overrides_name() {
        let record = build("Pageview", r#"{"event":"Signup","plan":"pro"}"#).unwrap();
        assert_eq!(record.event(), Some(&json!("Signup")));
        assert_eq!(record.get("plan"), Some(&json!("pro")));
        assert_eq!(record.len(), 2);
        let first_key = record.to_value().as_object().unwrap().keys().next().cloned();
        assert_eq!(first_key.as_deref(), Some("event"));
    }

    #[test]
    fn keeps_nested_and_non_string_values() {
        let record = build(
            "Checkout",
            r#"{"total": 12.5, "items": [1, 2], "meta": {"coupon": null}, "paid": true}"#,
        )
        .unwrap();
        assert_eq!(record.get("total"), Some(&json!(12.5)));
        assert_eq!(record.get("items"), Some(&json!([1, 2])));
        assert_eq!(record.get("meta"), Some(&json!({"coupon": null})));
        assert_eq!(record.get("paid"), Some(&json!(true)));
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        for payload in ["not json", "", "{'indication':'cough'}", "{\"a\":"] {
            assert!(matches!(build("Pageview", payload), Err(PayloadError::Parse(_))), "{payload}");
        }
    }

    #[test]
    fn non_object_payload_is_rejected() {
        for (payload, kind) in [("[1,2]", "an array"), ("42", "a number"), ("null", "null"), ("\"x\"", "a string")] {
            match build("Pageview", payload) {
                Err(PayloadError::NotAnObject(got)) => assert_eq!(got, kind),
                other => panic!("unexpected result for {payload}: {other:?}"),
            }
        }
    }

    #[test]
    fn named_record_has_only_event() {
        assert_eq!(EventRecord::named("Pageview").to_value(), json!({"event": "Pageview"}));
    }

    #[test]
    fn pretty_dump_is_multiline() {
        let record = build("Pageview", r#"{"indication":"cough"}"#).unwrap();
        assert!(record.pretty().contains("\n  \"indication\": \"cough\""));
        assert_eq!(record.compact(), r#"{"event":"Pageview","indication":"cough"}"#);
    }
}
