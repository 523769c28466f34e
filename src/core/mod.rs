//! Core handler types and traits

pub mod attr;
pub mod colour;
pub mod error;
pub mod event;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod sink;
pub mod timestamp;

pub use attr::{Attr, FieldValue, RecordAttr};
pub use colour::{Colour, Colours};
pub use error::{LoggerError, Result};
pub use event::{Event, Source};
pub use handler::{
    default_level_colours, Handler, HandlerBuilder, HandlerConfig, HandlerOptions, SOURCE_KEY,
};
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
