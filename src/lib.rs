//! # Pretty Logger
//!
//! A pluggable handler for structured log events that renders them as
//! human-readable, ANSI-colourised, multi-line text.
//!
//! ## Features
//!
//! - **Derivable handlers**: attach attributes and nest groups without
//!   touching the parent handler
//! - **Pluggable renderers**: pretty text (default), JSON and logfmt, or your own
//! - **Whole-record writes**: each event is rendered privately and written in
//!   one call, so concurrent loggers sharing a sink never interleave
//!
//! ```
//! use pretty_logger::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(Handler::new(sink.clone()));
//! logger.with([Attr::new("port", 8080)]).info("started");
//!
//! assert!(sink.contents().contains("port=8080"));
//! ```

pub mod core;
pub mod macros;
pub mod render;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Attr, Colour, Colours, Event, FieldValue, Handler, HandlerBuilder, HandlerOptions,
        LogLevel, Logger, LoggerError, LoggerMetrics, Record, RecordAttr, Result, Sink, Source,
        TimestampFormat,
    };
    pub use crate::render::{JsonRenderer, LogfmtRenderer, OutputFormat, PrettyRenderer, Renderer};
    pub use crate::sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
}

pub use crate::core::{
    Attr, Colour, Colours, Event, FieldValue, Handler, HandlerBuilder, HandlerConfig,
    HandlerOptions, LogLevel, Logger, LoggerError, LoggerMetrics, Record, RecordAttr, Result,
    Sink, Source, TimestampFormat,
};
pub use render::{
    JsonRenderer, LevelAlign, LogfmtRenderer, OutputFormat, PrettyRenderer, Renderer,
};
pub use sinks::{ConsoleSink, FileSink, MemorySink, WriterSink};
