//! Rendering of stored rows into display lines.
//!
//! A line is `<date time><separator>[Event ID: <id>, ]<message>`, where the
//! separator names the severity, e.g. `2024-05-01 09:30:00: ERROR: disk full`.

use std::fmt::{Display, Write};

use chrono::{DateTime, Local, TimeZone};
use devlog_config::defaults::DEFAULT_TIME_FORMAT;
use devlog_core::{LogRow, Severity};

/// Text placed between the timestamp and the rest of the line.
pub fn severity_separator(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => ": ERROR: ",
        Severity::Warning => ": WARNING: ",
        Severity::Info => ": INFO: ",
        Severity::Debug => ": DEBUG: ",
        Severity::Other(_) => ": ",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormatter {
    time_format: String,
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_FORMAT)
    }
}

impl LineFormatter {
    /// `time_format` is a chrono strftime pattern.
    pub fn new(time_format: impl Into<String>) -> Self {
        Self {
            time_format: time_format.into(),
        }
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Render in the machine's local timezone.
    pub fn format_row(&self, row: &LogRow) -> String {
        self.format_row_in(row, &Local)
    }

    pub fn format_row_in<Tz>(&self, row: &LogRow, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut line = String::with_capacity(row.message.len() + 64);

        line.push_str(&self.render_time(row.timestamp, tz));
        line.push_str(severity_separator(row.severity));

        if row.has_correlation() {
            // Writing to a String cannot fail.
            let _ = write!(line, "Event ID: {}, ", row.correlation_id);
        }

        line.push_str(&row.message);
        line
    }

    fn render_time<Tz>(&self, millis: i64, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let Some(utc) = DateTime::from_timestamp_millis(millis) else {
            return millis.to_string();
        };

        // An invalid pattern surfaces as a fmt::Error rather than a panic here.
        let mut rendered = String::new();
        match write!(rendered, "{}", utc.with_timezone(tz).format(&self.time_format)) {
            Ok(()) => rendered,
            Err(_) => millis.to_string(),
        }
    }
}
