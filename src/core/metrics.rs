//! Logger metrics for observability
//!
//! Counts what happened to events passed to a [`Logger`](super::Logger):
//! written, filtered out by level, or failed in the handler.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use pretty_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_handled();
/// metrics.record_failed();
///
/// assert_eq!(metrics.handled_count(), 1);
/// assert_eq!(metrics.failed_count(), 1);
/// assert_eq!(metrics.failure_rate(), 50.0);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Events rendered and written
    handled_count: AtomicU64,

    /// Events whose render or write failed
    failed_count: AtomicU64,

    /// Events below the handler's minimum level
    filtered_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            handled_count: AtomicU64::new(0),
            failed_count: AtomicU64::new(0),
            filtered_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn handled_count(&self) -> u64 {
        self.handled_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered_count(&self) -> u64 {
        self.filtered_count.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_handled(&self) {
        self.handled_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the previous failure count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed_count.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) {
        self.filtered_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Percentage of attempted events that failed
    pub fn failure_rate(&self) -> f64 {
        let failed = self.failed_count() as f64;
        let attempted = failed + self.handled_count() as f64;
        if attempted == 0.0 {
            0.0
        } else {
            failed / attempted * 100.0
        }
    }

    pub fn reset(&self) {
        self.handled_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
        self.filtered_count.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let metrics = LoggerMetrics::new();
        metrics.record_handled();
        metrics.record_handled();
        metrics.record_filtered();
        assert_eq!(metrics.record_failed(), 0);

        assert_eq!(metrics.handled_count(), 2);
        assert_eq!(metrics.filtered_count(), 1);
        assert_eq!(metrics.failed_count(), 1);

        metrics.reset();
        assert_eq!(metrics.handled_count(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..90 {
            metrics.record_handled();
        }
        for _ in 0..10 {
            metrics.record_failed();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }
}
