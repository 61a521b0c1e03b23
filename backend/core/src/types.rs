use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Importance of a log row.
///
/// Stored as a small integer. Values outside the four known levels are kept
/// as [`Severity::Other`] so they survive a write/read cycle unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Severity {
    Error,
    Warning,
    Info,
    Debug,
    /// A code outside 0..=3. [`Severity::normalized`] folds a known code
    /// wrapped here back into its named level.
    Other(i64),
}

impl Severity {
    pub const fn code(self) -> i64 {
        match self {
            Severity::Error => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
            Severity::Debug => 3,
            Severity::Other(code) => code,
        }
    }

    /// Canonical form: `Other` holding a known code becomes that level.
    pub const fn normalized(self) -> Self {
        Severity::from_code(self.code())
    }

    pub const fn from_code(code: i64) -> Self {
        match code {
            0 => Severity::Error,
            1 => Severity::Warning,
            2 => Severity::Info,
            3 => Severity::Debug,
            other => Severity::Other(other),
        }
    }

    /// Upper-case label, or `None` for an unrecognized code.
    pub const fn label(self) -> Option<&'static str> {
        match self {
            Severity::Error => Some("ERROR"),
            Severity::Warning => Some("WARNING"),
            Severity::Info => Some("INFO"),
            Severity::Debug => Some("DEBUG"),
            Severity::Other(_) => None,
        }
    }
}

impl From<i64> for Severity {
    fn from(code: i64) -> Self {
        Severity::from_code(code)
    }
}

impl From<Severity> for i64 {
    fn from(severity: Severity) -> Self {
        severity.code()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(f, "SEVERITY({})", self.code()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity '{0}' (expected error, warn, info, debug, or a number)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            other => other
                .parse::<i64>()
                .map(Severity::from_code)
                .map_err(|_| ParseSeverityError(s.to_string())),
        }
    }
}

/// One persisted diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRow {
    /// Milliseconds since the Unix epoch, stamped by the store on append.
    pub timestamp: i64,
    pub severity: Severity,
    /// Application event this row relates to; 0 means none.
    pub correlation_id: i64,
    pub message: String,
}

impl LogRow {
    pub fn has_correlation(&self) -> bool {
        self.correlation_id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_levels() {
        assert_eq!(Severity::from_code(0), Severity::Error);
        assert_eq!(Severity::from_code(1), Severity::Warning);
        assert_eq!(Severity::from_code(2), Severity::Info);
        assert_eq!(Severity::from_code(3), Severity::Debug);
    }

    #[test]
    fn unknown_code_is_preserved() {
        let sev = Severity::from_code(17);
        assert_eq!(sev, Severity::Other(17));
        assert_eq!(sev.code(), 17);
        assert!(sev.label().is_none());
        assert_eq!(sev.to_string(), "SEVERITY(17)");
    }

    #[test]
    fn normalizing_folds_known_codes_out_of_other() {
        assert_eq!(Severity::Other(2).normalized(), Severity::Info);
        assert_eq!(Severity::Other(0).normalized(), Severity::Error);
        assert_eq!(Severity::Other(-1).normalized(), Severity::Other(-1));
        assert_eq!(Severity::Debug.normalized(), Severity::Debug);
    }

    #[test]
    fn parses_labels_and_numbers() {
        assert_eq!("WARN".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" debug ".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("2".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("-4".parse::<Severity>().unwrap(), Severity::Other(-4));
        assert!("loud".parse::<Severity>().is_err());
    }

    #[test]
    fn row_serializes_severity_as_code() {
        let row = LogRow {
            timestamp: 1_700_000_000_000,
            severity: Severity::Warning,
            correlation_id: 9,
            message: "low battery".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["severity"], 1);
        assert_eq!(json["correlation_id"], 9);

        let back: LogRow = serde_json::from_value(json).unwrap();
        assert_eq!(back, row);
        assert!(back.has_correlation());
    }
}
