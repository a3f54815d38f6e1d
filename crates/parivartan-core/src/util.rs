//! Small shared helpers: identifiers, timestamps, input sanitization.

use chrono::{SecondsFormat, Utc};
use rand::Rng;

/// Current time as an RFC 3339 string with millisecond precision, the shape
/// every lifecycle stamp in the snapshot uses.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Timestamp-derived id with a random suffix to keep same-millisecond
/// creations distinct.
pub fn new_id(prefix: &str) -> String {
    let suffix: u32 = rand::rng().random();
    format!("{prefix}-{}-{suffix:08x}", now_millis())
}

/// Trim (optionally), strip control characters, and cap the length of a
/// user-supplied string.
pub fn clamp_string(value: &str, max_len: usize, trim: bool) -> String {
    let mut out = if trim {
        value.trim().to_string()
    } else {
        value.to_string()
    };
    out = out
        .chars()
        .filter(|ch| {
            let code = *ch as u32;
            code >= 32 && code != 127
        })
        .collect();
    if out.chars().count() > max_len {
        out = out.chars().take(max_len).collect();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct_and_prefixed() {
        let a = new_id("yp");
        let b = new_id("yp");
        assert!(a.starts_with("yp-"));
        assert_ne!(a, b);
    }

    #[test]
    fn clamp_strips_control_chars_and_caps_length() {
        assert_eq!(clamp_string("  West Zone  ", 80, true), "West Zone");
        assert_eq!(clamp_string("a\tb\nc", 80, false), "abc");
        assert_eq!(clamp_string("abcdef", 3, false), "abc");
    }

    #[test]
    fn now_iso_looks_like_rfc3339_utc() {
        let now = now_iso();
        assert!(now.ends_with('Z'));
        assert!(now.contains('T'));
    }
}
