use crate::severity::Severity;
use chrono::{DateTime, Utc};

/// RFC 3339, UTC, millisecond precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Layout of an emitted line.
///
/// `<timestamp> [<SEVERITY>] <message>\n`, or `[<SEVERITY>] <message>\n`
/// when timestamps are disabled. The message is copied verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    pub timestamps: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self { timestamps: true }
    }
}

impl LineFormat {
    pub fn without_timestamps() -> Self {
        Self { timestamps: false }
    }

    pub fn render(&self, at: DateTime<Utc>, severity: Severity, message: &str) -> String {
        // tag + brackets + spaces + newline
        let mut line = String::with_capacity(message.len() + 40);
        if self.timestamps {
            line.push_str(&at.format(TIMESTAMP_FORMAT).to_string());
            line.push(' ');
        }
        line.push('[');
        line.push_str(severity.as_str());
        line.push_str("] ");
        line.push_str(message);
        line.push('\n');
        line
    }
}
