//! Record renderers
//!
//! A renderer turns one [`Record`] into bytes. The handler renders into a
//! private buffer and writes it out in one piece, so renderers may write
//! incrementally.
//!
//! - `PrettyRenderer`: multi-line, colourised text (default)
//! - `JsonRenderer`: one JSON object per line
//! - `LogfmtRenderer`: one line of `key=value` pairs

use crate::core::{Record, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::sync::Arc;

pub mod json;
pub mod logfmt;
pub mod pretty;

pub use json::JsonRenderer;
pub use logfmt::LogfmtRenderer;
pub use pretty::{pad_left, pad_right, spaces, LevelAlign, PrettyRenderer};

/// Strategy for writing a record
///
/// Implementations must treat the record as read-only and must not depend on
/// the handler that produced it.
///
/// # Example
///
/// ```
/// use pretty_logger::core::{Record, Result};
/// use pretty_logger::render::Renderer;
/// use std::io::Write;
///
/// #[derive(Debug)]
/// struct MessageOnly;
///
/// impl Renderer for MessageOnly {
///     fn render(&self, out: &mut dyn Write, record: &Record) -> Result<()> {
///         writeln!(out, "{}", record.message)?;
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "message-only"
///     }
/// }
/// ```
pub trait Renderer: fmt::Debug + Send + Sync {
    fn render(&self, out: &mut dyn Write, record: &Record) -> Result<()>;
    fn name(&self) -> &str;
}

/// Built-in renderer selection, usable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Multi-line, colourised text
    #[default]
    Pretty,

    /// `{"time":"2025-01-08T10:30:45.123Z","level":"INFO","msg":"started"}`
    Json,

    /// `time=2025-01-08T10:30:45.123Z level=INFO msg="started"`
    Logfmt,
}

impl OutputFormat {
    /// Instantiate the renderer; `colours` only affects `Pretty`
    pub fn renderer(self, colours: bool) -> Arc<dyn Renderer> {
        match self {
            OutputFormat::Pretty => Arc::new(PrettyRenderer::new().with_colours(colours)),
            OutputFormat::Json => Arc::new(JsonRenderer::new()),
            OutputFormat::Logfmt => Arc::new(LogfmtRenderer::new()),
        }
    }
}
