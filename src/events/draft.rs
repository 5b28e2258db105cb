/// Raw form input, updated on every keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub event_name: String,
    pub event_payload: String,
}

impl EventDraft {
    #[cfg(test)]
    pub fn new(event_name: impl Into<String>, event_payload: impl Into<String>) -> Self {
        Self {
            event_name: event_name.into(),
            event_payload: event_payload.into(),
        }
    }

    pub fn clear(&mut self) {
        self.event_name.clear();
        self.event_payload.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.event_name.is_empty() && self.event_payload.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_both_fields() {
        let mut draft = EventDraft::new("Pageview", r#"{"indication":"cough"}"#);
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, EventDraft::default());
    }
}
