//! Timestamp formatting for rendered records
//!
//! The default is ISO 8601 in UTC with millisecond precision, e.g.
//! `2025-01-08T10:30:45.123Z`. Custom strftime patterns are validated before
//! use so a typo surfaces as an error instead of a panic inside `chrono`.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const ISO8601_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Seconds since the epoch: `1736332245`
    Unix,

    /// Milliseconds since the epoch: `1736332245123`
    UnixMillis,

    /// Any strftime-compatible pattern
    ///
    /// ```
    /// use pretty_logger::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// assert!(format.validate().is_ok());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a UTC timestamp
    ///
    /// Fails only for a `Custom` pattern that chrono cannot interpret.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        match self {
            TimestampFormat::Iso8601 => Ok(datetime.format(ISO8601_MILLIS).to_string()),
            TimestampFormat::Iso8601Micros => Ok(datetime.format(ISO8601_MICROS).to_string()),
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339()),
            TimestampFormat::Unix => Ok(datetime.timestamp().to_string()),
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(pattern) => {
                let mut out = String::with_capacity(pattern.len() + 16);
                write!(out, "{}", datetime.format(pattern))
                    .map_err(|_| LoggerError::timestamp_format(pattern.as_str()))?;
                Ok(out)
            }
        }
    }

    /// Check that a `Custom` pattern parses; built-in formats always do
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(pattern) = self {
            if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::timestamp_format(pattern.as_str()));
            }
        }
        Ok(())
    }
}
