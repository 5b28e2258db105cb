pub mod draft;
pub mod record;
pub mod validate;

pub use draft::EventDraft;
pub use record::EventRecord;
