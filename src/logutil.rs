//! Helpers for putting raw player input into log lines.
//!
//! Input arrives straight from a terminal, so it may carry control bytes or
//! be arbitrarily long. Escaping keeps each log record on one line.

/// Longest input echoed into a log record before it is cut short.
const MAX_PREVIEW: usize = 120;

/// Escape a line of player input for single-line logging.
///
/// Backslash, newline, carriage return and tab get their usual escapes,
/// other control characters become `\xNN`. Input longer than
/// [`MAX_PREVIEW`] characters ends in an ellipsis.
pub fn escape_log(s: &str) -> String {
    use std::fmt::Write;

    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 4);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
