use crate::events::EventRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPosition {
    TopRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTheme {
    Dark,
}

/// Display options shared by every notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: ToastPosition,
    pub auto_close_ms: u64,
    pub close_on_click: bool,
    pub draggable: bool,
    pub theme: ToastTheme,
}

pub const TOAST_OPTIONS: ToastOptions = ToastOptions {
    position: ToastPosition::TopRight,
    auto_close_ms: 5000,
    close_on_click: true,
    draggable: true,
    theme: ToastTheme::Dark,
};

pub const VERIFY_HINT_SHORT: &str = "check it with Inspect queue";
pub const VERIFY_HINT: &str = "Use \"Inspect queue\" in the header bar to check the tag manager queue.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub detail: Option<String>,
    pub auto_dismiss_ms: u64,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
            detail: None,
            auto_dismiss_ms: TOAST_OPTIONS.auto_close_ms,
        }
    }

    /// Success toast carrying a dump of the submitted record.
    pub fn submitted(record: &EventRecord) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: format!("Event submitted: {} ({VERIFY_HINT_SHORT})", record.compact()),
            detail: Some(format!("{}\n\n{}", record.pretty(), VERIFY_HINT)),
            auto_dismiss_ms: TOAST_OPTIONS.auto_close_ms,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// The "show transient message" surface.
pub trait Notifier {
    fn show(&self, notification: Notification);
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventDraft;

    #[test]
    fn submitted_includes_dump_and_hint() {
        let record = EventRecord::from_draft(&EventDraft::new("Pageview", r#"{"indication":"cough"}"#)).unwrap();
        let n = Notification::submitted(&record);
        assert_eq!(n.kind, NotificationKind::Success);
        assert!(n.message.contains(r#""indication":"cough""#));
        assert!(n.message.ends_with("(check it with Inspect queue)"));
        let detail = n.detail.unwrap();
        assert!(detail.contains("\"event\": \"Pageview\""));
        assert!(detail.ends_with(VERIFY_HINT));
        assert_eq!(n.auto_dismiss_ms, 5000);
    }

    #[test]
    fn error_has_no_detail() {
        let n = Notification::error("No event name provided");
        assert!(n.is_error());
        assert_eq!(n.detail, None);
        assert_eq!(n.auto_dismiss_ms, TOAST_OPTIONS.auto_close_ms);
    }
}
