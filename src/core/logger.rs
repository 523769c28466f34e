//! Logging front-end over a [`Handler`]
//!
//! The logger owns the parts of the pipeline that sit before rendering:
//! level filtering, timestamping, capturing the caller location and deciding
//! what to do when the handler fails.

use super::{
    attr::Attr,
    error::Result,
    event::{Event, Source},
    handler::Handler,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use std::sync::Arc;

/// Report the first failure and every thousandth after it
const FAILURE_REPORT_INTERVAL: u64 = 1000;

/// # Example
///
/// ```
/// use pretty_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(Handler::builder(sink.clone()).colours(false).build());
///
/// let db = logger.with_group("db").with([Attr::new("name", "main")]);
/// db.log_with(LogLevel::Info, "connected", [Attr::new("host", "localhost")]);
///
/// let output = sink.contents();
/// assert!(output.contains("db.name=main"));
/// assert!(output.contains("db.host=localhost"));
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    handler: Handler,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    pub fn new(handler: Handler) -> Self {
        Self {
            handler,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Counters shared by this logger and every logger derived from it
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Child logger carrying `attrs` on every event; no attrs returns a clone
    #[must_use]
    pub fn with(&self, attrs: impl IntoIterator<Item = Attr>) -> Logger {
        let attrs: Vec<Attr> = attrs.into_iter().collect();
        if attrs.is_empty() {
            return self.clone();
        }
        Logger {
            handler: self.handler.with_attrs(attrs),
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Child logger nesting later attributes under `name`; an empty name returns a clone
    #[must_use]
    pub fn with_group(&self, name: impl Into<String>) -> Logger {
        let name = name.into();
        if name.is_empty() {
            return self.clone();
        }
        Logger {
            handler: self.handler.with_group(name),
            metrics: Arc::clone(&self.metrics),
        }
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.handler.enabled(level)
    }

    /// Log an event and return the handler's error, if any
    ///
    /// Disabled levels are skipped before any rendering and return `Ok(())`.
    #[track_caller]
    pub fn try_log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<()> {
        if !self.enabled(level) {
            self.metrics.record_filtered();
            return Ok(());
        }

        let event = Event::new(level, message)
            .with_attrs(attrs)
            .with_source(Source::caller());

        match self.handler.handle(&event) {
            Ok(()) => {
                self.metrics.record_handled();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(e)
            }
        }
    }

    /// Log an event with attributes; failures are counted and reported on stderr
    #[track_caller]
    pub fn log_with(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) {
        if let Err(e) = self.try_log(level, message, attrs) {
            let failures = self.metrics.failed_count();
            if failures == 1 || failures % FAILURE_REPORT_INTERVAL == 0 {
                eprintln!(
                    "[LOGGER ERROR] Failed to handle {} event ({} failures so far): {}",
                    level, failures, e
                );
            }
        }
    }

    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        self.log_with(level, message, Vec::new());
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }

    pub fn flush(&self) -> Result<()> {
        self.handler.flush()
    }
}
