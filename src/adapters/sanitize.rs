//! Log sanitization for contact details.
//!
//! The Alerts page takes an e-mail address and the chatbot takes free text;
//! either may end up in a formatted log line. Every line written through
//! [`SanitizingMakeWriter`] has e-mail addresses and phone numbers replaced
//! before it reaches the sink.
//!
//! Input is capped (see `HEALTHTRENDS_SANITIZE_MAX_BYTES`) so a huge line does
//! not turn into a huge regex scan.

use regex::{Regex, RegexSet};
use std::sync::OnceLock;
use tracing_subscriber::fmt::MakeWriter;

static CONTACT_PATTERNS: OnceLock<ContactPatterns> = OnceLock::new();

/// Default cap on bytes sanitized per call (16 KiB).
const DEFAULT_SANITIZE_MAX_BYTES: usize = 16 * 1024;

struct ContactPattern {
    regex: Regex,
    replacement: &'static str,
}

struct ContactPatterns {
    set: RegexSet,
    patterns: Vec<ContactPattern>,
}

fn truncate_to_char_boundary(input: &str, max_bytes: usize) -> (&str, bool) {
    if input.len() <= max_bytes {
        return (input, false);
    }

    let mut end = max_bytes;
    while end > 0 && !input.is_char_boundary(end) {
        end -= 1;
    }
    (&input[..end], true)
}

fn max_sanitize_bytes() -> usize {
    std::env::var("HEALTHTRENDS_SANITIZE_MAX_BYTES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|&v| v > 0)
        .unwrap_or(DEFAULT_SANITIZE_MAX_BYTES)
}

fn get_patterns() -> &'static ContactPatterns {
    CONTACT_PATTERNS.get_or_init(|| {
        let rules: [(&'static str, &'static str); 2] = [
            (
                r"(?i)\b[a-z0-9](?:[a-z0-9._%+-]{0,62}[a-z0-9])?@(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z]{2,}\b",
                "[REDACTED-EMAIL]",
            ),
            (
                r"\b(?:\+?1[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}\b",
                "[REDACTED-PHONE]",
            ),
        ];

        let set = RegexSet::new(rules.iter().map(|(p, _)| *p)).expect("Valid regex set");
        let patterns = rules
            .into_iter()
            .map(|(pattern, replacement)| ContactPattern {
                regex: Regex::new(pattern).expect("Valid regex"),
                replacement,
            })
            .collect();

        ContactPatterns { set, patterns }
    })
}

/// Replace contact details in `input`.
#[must_use]
pub fn sanitize(input: &str) -> String {
    sanitize_with_limit(input, max_sanitize_bytes())
}

fn sanitize_with_limit(input: &str, max_bytes: usize) -> String {
    let patterns = get_patterns();
    let (prefix, truncated) = truncate_to_char_boundary(input, max_bytes);

    let mut result = prefix.to_string();
    for idx in patterns.set.matches(prefix).into_iter() {
        let pattern = &patterns.patterns[idx];
        result = pattern
            .regex
            .replace_all(&result, pattern.replacement)
            .into_owned();
    }

    if truncated {
        result.push_str(" [TRUNCATED]");
        // The cut may have dropped the line terminator.
        if input.ends_with('\n') {
            result.push('\n');
        }
    }
    result
}

/// A `tracing_subscriber` writer wrapper that sanitizes each formatted line
/// before it is written to the underlying sink.
#[derive(Debug, Clone)]
pub struct SanitizingMakeWriter<M> {
    inner: M,
}

impl<M> SanitizingMakeWriter<M> {
    #[must_use]
    pub fn new(inner: M) -> Self {
        Self { inner }
    }
}

pub struct SanitizingWriter<W> {
    inner: W,
    buffer: Vec<u8>,
}

impl<W> SanitizingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }
}

impl<W> SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn flush_lines(&mut self) -> std::io::Result<()> {
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let sanitized = sanitize(&String::from_utf8_lossy(&line));
            self.inner.write_all(sanitized.as_bytes())?;
        }
        Ok(())
    }
}

impl<W> std::io::Write for SanitizingWriter<W>
where
    W: std::io::Write,
{
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        // A formatter that never emits a newline must not grow the buffer forever.
        let hard_cap = max_sanitize_bytes().saturating_mul(2);
        if self.buffer.len() > hard_cap {
            let sanitized = sanitize(&String::from_utf8_lossy(&self.buffer));
            self.inner.write_all(sanitized.as_bytes())?;
            if !sanitized.ends_with('\n') {
                self.inner.write_all(b"\n")?;
            }
            self.buffer.clear();
            return Ok(buf.len());
        }

        self.flush_lines()?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_lines()?;

        if !self.buffer.is_empty() {
            let sanitized = sanitize(&String::from_utf8_lossy(&self.buffer));
            self.inner.write_all(sanitized.as_bytes())?;
            self.buffer.clear();
        }

        self.inner.flush()
    }
}

impl<'a, M> MakeWriter<'a> for SanitizingMakeWriter<M>
where
    M: MakeWriter<'a>,
{
    type Writer = SanitizingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SanitizingWriter::new(self.inner.make_writer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sanitize_email() {
        let sanitized = sanitize("subscribed reader@example.org to alerts");
        assert_eq!(sanitized, "subscribed [REDACTED-EMAIL] to alerts");
    }

    #[test]
    fn test_sanitize_phone() {
        let sanitized = sanitize("call 555-123-4567 now");
        assert!(sanitized.contains("[REDACTED-PHONE]"));
        assert!(!sanitized.contains("4567"));
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = "fetched 30 trend points for COVID-19";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_truncates_large_inputs() {
        let sanitized = sanitize_with_limit("héllo wörld and more", 2);
        assert!(sanitized.ends_with("[TRUNCATED]"));
    }

    #[test]
    fn test_truncation_keeps_line_terminator() {
        let sanitized = sanitize_with_limit("abcdefgh\n", 4);
        assert_eq!(sanitized, "abcd [TRUNCATED]\n");
    }

    #[test]
    fn test_writer_sanitizes_per_line() {
        let mut out = Vec::new();
        {
            let mut writer = SanitizingWriter::new(&mut out);
            writer.write_all(b"first a@b.io\nsecond ").unwrap();
            writer.write_all(b"line\n").unwrap();
            writer.flush().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "first [REDACTED-EMAIL]\nsecond line\n");
    }

    #[test]
    fn test_writer_oversized_line_does_not_swallow_next() {
        let long_line = "x".repeat(DEFAULT_SANITIZE_MAX_BYTES + 4 * 1024);
        let mut out = Vec::new();
        {
            let mut writer = SanitizingWriter::new(&mut out);
            writer.write_all(long_line.as_bytes()).unwrap();
            writer.write_all(b"\nnext line\n").unwrap();
            writer.flush().unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("x [TRUNCATED]"));
        assert_eq!(lines[1], "next line");
    }
}
