//! Observability for addrbook
//!
//! Structured JSON logging of typed lifecycle events. Observability is
//! read-only: it never changes the outcome of an operation.
//!
//! ```ignore
//! use addrbook::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RecordCreated, &[("id", "4")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::Severity;

/// Log a lifecycle event
pub fn log_event(event: Event) {
    logger::emit(event, &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    logger::emit(event, fields);
}
