//! Logging macros with format arguments and optional attributes.
//!
//! Attributes follow the message after a `;` as `key => value` pairs.
//!
//! # Examples
//!
//! ```
//! use pretty_logger::prelude::*;
//! use pretty_logger::info;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(Handler::builder(sink.clone()).colours(false).build());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments and attributes
//! let port = 8080;
//! info!(logger, "Listening on port {}", port; "port" => port, "tls" => false);
//!
//! assert!(sink.contents().contains("port=8080"));
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new(Handler::new(MemorySink::new()));
/// use pretty_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(logger, LogLevel::Warn, "Slow query"; "elapsed_ms" => 1200);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* ; $($key:expr => $value:expr),+ $(,)?) => {
        $logger.log_with(
            $level,
            format!($fmt $(, $arg)*),
            vec![$($crate::Attr::new($key, $value)),+],
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new(Handler::builder(MemorySink::new()).level(LogLevel::Trace).build());
/// use pretty_logger::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42; "var" => "x");
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new(Handler::new(MemorySink::new()));
/// use pretty_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100; "batch" => 3);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use pretty_logger::prelude::*;
/// # let logger = Logger::new(Handler::new(MemorySink::new()));
/// use pretty_logger::error;
/// error!(logger, "Failed to connect to database"; "retries" => 3);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
