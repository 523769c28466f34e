//! Concurrency tests for shared sinks
//!
//! These tests verify:
//! - Records from many threads are written whole, never interleaved
//! - Derived handlers can be created and used from several threads at once
//! - Metrics stay consistent under concurrent logging

use chrono::{TimeZone, Utc};
use pretty_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 200;

fn plain(sink: &MemorySink) -> Handler {
    Handler::builder(sink.clone()).colours(false).build()
}

#[test]
fn test_records_are_not_interleaved() {
    let sink = MemorySink::new();
    let handler = plain(&sink);
    let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap();

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let handler = handler.with_group(format!("t{}", t));
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let event = Event::new(LogLevel::Info, format!("thread {} message {}", t, i))
                        .with_time(Some(time))
                        .with_attr("i", i as i64)
                        .with_attr("thread", t as i64);
                    handler.handle(&event).expect("handle should succeed");
                }
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker panicked");
    }

    let output = sink.contents();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), THREADS * PER_THREAD * 3);

    let mut seen = HashSet::new();
    for record in lines.chunks(3) {
        let header = record[0];
        assert!(header.starts_with("INFO ["), "bad header: {header}");

        let message = header
            .rsplit("] ")
            .next()
            .expect("header has a message");
        let mut words = message.split(' ');
        let t: usize = words.nth(1).unwrap().parse().unwrap();
        let i: usize = words.nth(1).unwrap().parse().unwrap();

        assert_eq!(record[1].trim_start(), format!("t{}.i={}", t, i));
        assert_eq!(record[2].trim_start(), format!("t{}.thread={}", t, t));
        assert!(seen.insert((t, i)), "duplicate record {t}/{i}");
    }
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn test_concurrent_derivation_is_isolated() {
    let sink = MemorySink::new();
    let base = Arc::new(plain(&sink).with_attrs([Attr::new("app", "demo")]));

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let base = Arc::clone(&base);
            thread::spawn(move || {
                let derived = base.with_attrs([Attr::new("worker", t as i64)]);
                assert_eq!(derived.attrs().len(), 2);
                derived
            })
        })
        .collect();

    let derived: Vec<Handler> = workers
        .into_iter()
        .map(|w| w.join().expect("worker panicked"))
        .collect();

    assert_eq!(base.attrs().len(), 1);
    for (t, handler) in derived.iter().enumerate() {
        assert_eq!(handler.attrs()[1].value, FieldValue::Int(t as i64));
    }
}

#[test]
fn test_concurrent_logger_metrics() {
    let sink = MemorySink::new();
    let logger = Logger::new(plain(&sink));

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = logger.with([Attr::new("thread", t as i64)]);
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    logger.info(format!("message {}", i));
                    logger.debug("filtered");
                }
            });
        }
    });

    let metrics = logger.metrics();
    assert_eq!(metrics.handled_count(), (THREADS * PER_THREAD) as u64);
    assert_eq!(metrics.filtered_count(), (THREADS * PER_THREAD) as u64);
    assert_eq!(metrics.failed_count(), 0);
    assert_eq!(sink.contents().lines().count(), THREADS * PER_THREAD * 2);
}

#[test]
fn test_concurrent_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("concurrent.log");

    let logger = Logger::new(
        Handler::builder(FileSink::new(&log_file).expect("Failed to open file"))
            .output_format(OutputFormat::Json)
            .build(),
    );

    thread::scope(|scope| {
        for t in 0..THREADS {
            let logger = logger.clone();
            scope.spawn(move || {
                for i in 0..PER_THREAD {
                    logger.log_with(LogLevel::Warn, "tick", [Attr::new("t", t as i64), Attr::new("i", i as i64)]);
                }
            });
        }
    });
    logger.flush().expect("Failed to flush");

    let content = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let mut count = 0;
    for line in content.lines() {
        let value: serde_json::Value = serde_json::from_str(line).expect("each line is one JSON record");
        assert_eq!(value["msg"], "tick");
        count += 1;
    }
    assert_eq!(count, THREADS * PER_THREAD);
}
