use crate::error::{SinkError, ValidationError};
use crate::events::validate::validate;
use crate::events::{EventDraft, EventRecord};
use crate::notify::{Notification, Notifier};
use crate::sink::EventSink;

/// How a single submit attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Rejected(ValidationError),
    Appended(EventRecord),
    Skipped(EventRecord),
}

impl Submission {
    pub fn cleared_draft(&self) -> bool {
        matches!(self, Submission::Appended(_))
    }
}

pub struct SubmissionPipeline<S, N> {
    sink: S,
    notifier: N,
}

impl<S: EventSink, N: Notifier> SubmissionPipeline<S, N> {
    pub fn new(sink: S, notifier: N) -> Self {
        Self { sink, notifier }
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[cfg(test)]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Builds, validates and pushes the draft, then reports the outcome.
    /// The draft is cleared only when the record reached the queue.
    pub fn submit(&self, draft: &mut EventDraft) -> Submission {
        let record = build_record(draft);

        if let Err(err) = validate(draft, &record) {
            log::debug!("rejecting submission: {err}");
            self.notifier.show(Notification::error(err.to_string()));
            return Submission::Rejected(err);
        }

        if !self.sink.is_available() {
            log::warn!("{}, skipping {}", SinkError::Unavailable, record.compact());
            self.notifier.show(Notification::error(SinkError::Unavailable.to_string()));
            return Submission::Skipped(record);
        }

        log::info!("pushing event {}", record.compact());
        self.sink.push(record.clone());
        draft.clear();
        self.notifier.show(Notification::submitted(&record));
        Submission::Appended(record)
    }
}

fn build_record(draft: &EventDraft) -> EventRecord {
    match EventRecord::from_draft(draft) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("ignoring event payload: {err}");
            EventRecord::named(&draft.event_name)
        }
    }
}
