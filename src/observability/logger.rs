//! One-line JSON log records on stderr
//!
//! A record is `{"event":..,"severity":..,<fields sorted by key>}`. stdout
//! is left to command and api responses.

use std::io::{self, Write};

use serde_json::Value;

use super::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Per-write detail
    Trace,
    Info,
    /// Degraded read, the caller still gets an answer
    Warn,
    /// The slot could not be read at all
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

/// Writes one record for `event`. A failed write is dropped.
pub(super) fn emit(event: Event, fields: &[(&str, &str)]) {
    let line = render(event, fields);
    let _ = io::stderr().lock().write_all(line.as_bytes());
}

pub(super) fn render(event: Event, fields: &[(&str, &str)]) -> String {
    let mut fields = fields.to_vec();
    fields.sort_by_key(|(key, _)| *key);

    let mut line = format!(
        "{{\"event\":{},\"severity\":{}",
        quoted(event.as_str()),
        quoted(event.severity().as_str())
    );
    for (key, value) in fields {
        line.push(',');
        line.push_str(&quoted(key));
        line.push(':');
        line.push_str(&quoted(value));
    }
    line.push_str("}\n");
    line
}

fn quoted(s: &str) -> String {
    Value::from(s).to_string()
}
