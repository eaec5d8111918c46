//! Logging helpers that keep player input and narration on a single log line.

use std::fmt::Write;

/// Longest preview kept in a log line before truncating with an ellipsis.
pub const MAX_PREVIEW: usize = 200;

/// Escape a player-supplied or narrated string for single-line logging.
///
/// Backslash, newline, carriage return and tab get their usual escapes; other
/// control characters become `\xNN`. Output is capped at [`MAX_PREVIEW`]
/// characters.
pub fn escape_log(s: &str) -> String {
    escape_log_with_limit(s, MAX_PREVIEW)
}

pub fn escape_log_with_limit(s: &str, limit: usize) -> String {
    let mut out = String::with_capacity(s.len().min(limit) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= limit {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_log("идти\nкухня\t"), "идти\\nкухня\\t");
        assert_eq!(escape_log("a\u{7}b"), "a\\x07b");
    }

    #[test]
    fn truncates_by_characters_not_bytes() {
        assert_eq!(escape_log_with_limit("рюкзак", 3), "рюк…");
        assert_eq!(escape_log_with_limit("чай", 3), "чай");
    }
}
