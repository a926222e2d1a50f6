//! Observable events for addrbook
//!
//! Events are explicit and typed; their string form is what appears in the
//! `event` key of a log line.

use super::logger::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration file loaded and validated
    ConfigLoaded,
    /// Data directory initialized
    DataDirInitialized,
    /// Record store bound to its slot
    StoreOpened,
    /// Slot content unparseable; treated as empty
    SlotCorrupt,
    /// Slot read failed; lists degrade to empty, mutations are refused
    SlotUnreadable,
    /// Collection written back to the slot
    SlotWritten,
    /// New record persisted
    RecordCreated,
    /// Existing record overwritten in place
    RecordUpdated,
    /// Record removed
    RecordDeleted,
    /// Update/delete target id not present
    RecordNotFound,
    /// Submitted fields failed validation
    ValidationRejected,
    /// Region reference list loaded
    RegionsLoaded,
    /// Serving loop started
    Serving,
    /// Serving loop ended
    ServingStopped,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DataDirInitialized => "DATA_DIR_INITIALIZED",
            Event::StoreOpened => "STORE_OPENED",
            Event::SlotCorrupt => "SLOT_CORRUPT",
            Event::SlotUnreadable => "SLOT_UNREADABLE",
            Event::SlotWritten => "SLOT_WRITTEN",
            Event::RecordCreated => "RECORD_CREATED",
            Event::RecordUpdated => "RECORD_UPDATED",
            Event::RecordDeleted => "RECORD_DELETED",
            Event::RecordNotFound => "RECORD_NOT_FOUND",
            Event::ValidationRejected => "VALIDATION_REJECTED",
            Event::RegionsLoaded => "REGIONS_LOADED",
            Event::Serving => "ADDRBOOK_SERVING",
            Event::ServingStopped => "ADDRBOOK_STOPPED",
        }
    }

    /// Severity this event is logged at. Nothing in the address book is fatal.
    pub fn severity(&self) -> Severity {
        match self {
            Event::SlotUnreadable => Severity::Error,
            Event::SlotCorrupt => Severity::Warn,
            Event::SlotWritten => Severity::Trace,
            _ => Severity::Info,
        }
    }
}
