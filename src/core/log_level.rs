//! Severity levels
//!
//! Levels are ordered from `Trace` to `Fatal`; a handler emits an event when
//! its level is at or above the handler's minimum. The upper-case name is also
//! the badge text of pretty output, so every name fits the five-column badge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
}

impl LogLevel {
    /// Every level, least severe first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Badge text, e.g. `INFO`
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; `warning` is accepted for `Warn`
impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("WARNING") {
            return Ok(LogLevel::Warn);
        }
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Invalid log level: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::pretty::LEVEL_WIDTH;

    #[test]
    fn test_all_is_sorted_by_severity() {
        assert!(LogLevel::ALL.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(LogLevel::ALL.first(), Some(&LogLevel::Trace));
        assert_eq!(LogLevel::ALL.last(), Some(&LogLevel::Fatal));
    }

    #[test]
    fn test_names_fit_badge() {
        let widest = LogLevel::ALL.iter().map(|l| l.as_str().len()).max();
        assert_eq!(widest, Some(LEVEL_WIDTH));
    }

    #[test]
    fn test_parse_every_level() {
        for level in LogLevel::ALL {
            assert_eq!(level.as_str().parse::<LogLevel>(), Ok(level));
            assert_eq!(level.as_str().to_lowercase().parse::<LogLevel>(), Ok(level));
        }
    }

    #[test]
    fn test_parse_aliases_and_errors() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!("Info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!(
            "verbose".parse::<LogLevel>(),
            Err("Invalid log level: 'verbose'".to_string())
        );
    }

    #[test]
    fn test_serde_uses_variant_names() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), "\"Warn\"");
        let level: LogLevel = serde_json::from_str("\"Error\"").unwrap();
        assert_eq!(level, LogLevel::Error);
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }
}
