//! Terminal output utilities: ANSI styling and formatted notes.

use std::io::IsTerminal;

use devlog::Severity;

// ---------------------------------------------------------------------------
// ANSI Color/Style helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Check if stdout is a terminal that wants color output.
pub fn supports_color() -> bool {
    std::io::stdout().is_terminal()
        && std::env::var("NO_COLOR").is_err()
        && std::env::var("TERM")
            .map(|t| t != "dumb")
            .unwrap_or(false)
}

/// Wrap a rendered log line in the color of its severity.
pub fn paint_line(severity: Severity, line: &str) -> String {
    let color = match severity {
        Severity::Error => RED,
        Severity::Warning => YELLOW,
        Severity::Info => CYAN,
        Severity::Debug | Severity::Other(_) => DIM,
    };
    format!("{color}{line}{RESET}")
}

// ---------------------------------------------------------------------------
// Formatted notes
// ---------------------------------------------------------------------------

/// Print a formatted WARNING note.
pub fn note_warn(msg: &str) {
    if supports_color() {
        println!("{YELLOW}{BOLD}⚠{RESET} {msg}");
    } else {
        println!("WARN: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut result = String::with_capacity(s.len());
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                result.push(c);
            }
        }
        result
    }

    #[test]
    fn painting_keeps_visible_text() {
        let line = "2024-05-01 09:30:00: ERROR: Event ID: 7, crash";
        let painted = paint_line(Severity::Error, line);
        assert!(painted.starts_with(RED));
        assert!(painted.ends_with(RESET));
        assert_eq!(strip_ansi(&painted), line);
    }

    #[test]
    fn unknown_severity_is_dimmed() {
        let painted = paint_line(Severity::Other(9), "x");
        assert_eq!(painted, format!("{DIM}x{RESET}"));
    }
}
