//! Logfmt renderer (key=value pairs)
//!
//! Example: `time=2025-01-08T10:30:45.123Z level=INFO msg="Request processed" db.host=x`

use super::Renderer;
use crate::core::{FieldValue, Record, Result};
use std::io::Write;

#[derive(Debug, Clone, Default)]
pub struct LogfmtRenderer;

impl LogfmtRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Format a record as one logfmt line, without the trailing newline
    pub fn format_line(&self, record: &Record) -> String {
        let mut parts = Vec::with_capacity(record.attrs.len() + 3);

        if !record.time.is_empty() {
            parts.push(format!("time={}", escape_value(&record.time)));
        }
        parts.push(format!("level={}", escape_value(&record.level)));
        // Message is always quoted
        parts.push(format!("msg={}", quote_value(&record.message)));

        for attr in &record.attrs {
            let value = match &attr.value {
                FieldValue::String(s) => escape_value(s),
                other => other.to_string(),
            };
            parts.push(format!("{}={}", escape_key(&attr.qualified_key()), value));
        }

        parts.join(" ")
    }
}

impl Renderer for LogfmtRenderer {
    fn render(&self, out: &mut dyn Write, record: &Record) -> Result<()> {
        let mut line = self.format_line(record);
        line.push('\n');
        out.write_all(line.as_bytes())?;
        Ok(())
    }

    fn name(&self) -> &str {
        "logfmt"
    }
}

/// Written in place of a key with no safe characters left
const EMPTY_KEY: &str = "_";

/// Keep only characters that are safe in an unquoted key; `.` separates groups
fn escape_key(key: &str) -> String {
    let escaped: String = key
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        .collect();
    if escaped.is_empty() {
        EMPTY_KEY.to_string()
    } else {
        escaped
    }
}

/// Quote a value if it is empty or contains whitespace, control characters,
/// quotes or `=`
fn escape_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '='));
    if needs_quotes {
        quote_value(value)
    } else {
        value.to_string()
    }
}

/// Quote and escape so the value always stays on one line
fn quote_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
