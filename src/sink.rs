use std::cell::RefCell;
use std::rc::Rc;

use serde_json::Value;

use crate::events::EventRecord;

/// Append-only destination for submitted records.
pub trait EventSink {
    /// The queue is created asynchronously by the bootstrap, so this is probed
    /// on every submit.
    fn is_available(&self) -> bool;
    fn push(&self, record: EventRecord);
}

/// The tag manager's `_mtm`-style queue. Clones share the same queue.
#[derive(Debug, Clone, Default)]
pub struct TagManagerQueue {
    entries: Rc<RefCell<Option<Vec<Value>>>>,
}

impl TagManagerQueue {
    /// A handle to a queue nobody has created yet.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Creates the queue unless it already exists; existing entries are kept.
    pub fn create_if_absent(&self) {
        self.entries.borrow_mut().get_or_insert_with(Vec::new);
    }

    pub fn push_value(&self, value: Value) {
        match self.entries.borrow_mut().as_mut() {
            Some(entries) => entries.push(value),
            None => log::warn!("dropping queue entry, queue does not exist"),
        }
    }

    /// A copy of the current contents, or `None` before the bootstrap ran.
    pub fn snapshot(&self) -> Option<Vec<Value>> {
        self.entries.borrow().clone()
    }
}

impl EventSink for TagManagerQueue {
    fn is_available(&self) -> bool {
        self.entries.borrow().is_some()
    }

    fn push(&self, record: EventRecord) {
        self.push_value(record.into());
    }
}
