use std::time::{SystemTime, UNIX_EPOCH};

pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

/// adw toasts time out in whole seconds.
pub fn toast_timeout_secs(ms: u64) -> u32 {
    ms.div_ceil(1000).min(u32::MAX as u64) as u32
}

pub fn pretty_queue(entries: &[serde_json::Value]) -> String {
    format!("{:#}", serde_json::Value::Array(entries.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn timeout_rounds_up_to_seconds() {
        assert_eq!(toast_timeout_secs(5000), 5);
        assert_eq!(toast_timeout_secs(1), 1);
        assert_eq!(toast_timeout_secs(2500), 3);
        assert_eq!(toast_timeout_secs(0), 0);
    }

    #[test]
    fn pretty_queue_lists_entries() {
        let dump = pretty_queue(&[json!({"event": "mtm.Start"})]);
        assert!(dump.starts_with('['));
        assert!(dump.contains("\"event\": \"mtm.Start\""));
    }

    #[test]
    fn epoch_millis_is_after_2020() {
        assert!(epoch_millis() > 1_577_836_800_000);
    }
}
