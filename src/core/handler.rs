//! The log handler: configuration, copy-on-derive state and the emission path
//!
//! A [`Handler`] pairs an immutable, shared [`HandlerConfig`] with two pieces
//! of inherited state: attributes attached through [`Handler::with_attrs`]
//! and the group path built by [`Handler::with_group`]. Deriving never
//! mutates the parent; each child gets fresh `Arc` slices.

use super::{
    attr::{Attr, RecordAttr},
    colour::{Colour, Colours},
    error::{LoggerError, Result},
    event::Event,
    log_level::LogLevel,
    record::Record,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::render::{OutputFormat, Renderer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::iter;
use std::sync::Arc;

/// Attribute key used for the caller location
pub const SOURCE_KEY: &str = "source";

/// Colours per level when none are configured
pub fn default_level_colours() -> BTreeMap<LogLevel, Colours> {
    BTreeMap::from([
        (LogLevel::Debug, Colours::from(Colour::FG_BLACK)),
        (LogLevel::Info, Colours::from(Colour::FG_CYAN)),
        (LogLevel::Warn, Colours::from(Colour::FG_YELLOW)),
        (LogLevel::Error, Colours::from(Colour::FG_RED)),
    ])
}

/// Configuration shared read-only by a handler and everything derived from it
#[derive(Debug)]
pub struct HandlerConfig {
    pub min_level: LogLevel,
    pub add_source: bool,
    pub level_colours: BTreeMap<LogLevel, Colours>,
    pub timestamp_format: TimestampFormat,
    pub renderer: Arc<dyn Renderer>,
}

impl HandlerConfig {
    /// Colours for `level`, falling back to [`Colours::fallback`]
    pub fn colours_for(&self, level: LogLevel) -> Colours {
        self.level_colours
            .get(&level)
            .cloned()
            .unwrap_or_else(Colours::fallback)
    }
}

/// Serializable handler settings
///
/// Mirrors the builder, minus custom renderers. Missing fields take their
/// defaults; a supplied `level_colours` map replaces the default map as a
/// whole.
///
/// # Example
///
/// ```
/// use pretty_logger::{HandlerOptions, LogLevel};
///
/// let options = HandlerOptions::from_json(r#"{"level": "Debug", "add_source": true}"#).unwrap();
/// assert_eq!(options.level, LogLevel::Debug);
/// assert!(options.add_source);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerOptions {
    pub level: LogLevel,
    pub add_source: bool,
    pub level_colours: BTreeMap<LogLevel, Colours>,
    pub timestamp_format: TimestampFormat,
    pub format: OutputFormat,
    pub colours: bool,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            add_source: false,
            level_colours: default_level_colours(),
            timestamp_format: TimestampFormat::default(),
            format: OutputFormat::default(),
            colours: true,
        }
    }
}

impl HandlerOptions {
    /// Decode options from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        self.timestamp_format
            .validate()
            .map_err(|e| LoggerError::config("HandlerOptions", e.to_string()))
    }
}

/// Builder for constructing a [`Handler`] with a fluent API
///
/// # Example
///
/// ```
/// use pretty_logger::prelude::*;
///
/// let sink = MemorySink::new();
/// let handler = Handler::builder(sink.clone())
///     .level(LogLevel::Debug)
///     .add_source(true)
///     .level_colour(LogLevel::Info, [Colour::BOLD, Colour::FG_GREEN])
///     .custom_timestamp("%H:%M:%S")
///     .build();
///
/// assert!(handler.enabled(LogLevel::Debug));
/// ```
pub struct HandlerBuilder {
    sink: Arc<dyn Sink>,
    options: HandlerOptions,
    renderer: Option<Arc<dyn Renderer>>,
}

impl HandlerBuilder {
    /// Start from defaults with a sink that may also be used elsewhere
    pub fn shared(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            options: HandlerOptions::default(),
            renderer: None,
        }
    }

    /// Replace every setting with `options`
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: HandlerOptions) -> Self {
        self.options = options;
        self
    }

    /// Minimum enabled level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.options.level = level;
        self
    }

    /// Attach the caller location as a `source` attribute
    #[must_use = "builder methods return a new value"]
    pub fn add_source(mut self, add_source: bool) -> Self {
        self.options.add_source = add_source;
        self
    }

    /// Replace the whole level colour map
    #[must_use = "builder methods return a new value"]
    pub fn level_colours(mut self, colours: BTreeMap<LogLevel, Colours>) -> Self {
        self.options.level_colours = colours;
        self
    }

    /// Set the colours of one level
    #[must_use = "builder methods return a new value"]
    pub fn level_colour(mut self, level: LogLevel, colours: impl Into<Colours>) -> Self {
        self.options.level_colours.insert(level, colours.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    /// Use a strftime-compatible timestamp pattern
    #[must_use = "builder methods return a new value"]
    pub fn custom_timestamp(mut self, pattern: &str) -> Self {
        self.options.timestamp_format = TimestampFormat::Custom(pattern.to_string());
        self
    }

    /// Pick one of the built-in renderers
    #[must_use = "builder methods return a new value"]
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.options.format = format;
        self
    }

    /// Toggle escape sequences in the pretty renderer
    #[must_use = "builder methods return a new value"]
    pub fn colours(mut self, colours: bool) -> Self {
        self.options.colours = colours;
        self
    }

    /// Use a custom renderer; takes precedence over `output_format`
    #[must_use = "builder methods return a new value"]
    pub fn renderer<R: Renderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Some(Arc::new(renderer));
        self
    }

    /// Build the handler
    pub fn build(self) -> Handler {
        let HandlerOptions {
            level,
            add_source,
            level_colours,
            timestamp_format,
            format,
            colours,
        } = self.options;

        let renderer = self
            .renderer
            .unwrap_or_else(|| format.renderer(colours));

        Handler {
            sink: self.sink,
            config: Arc::new(HandlerConfig {
                min_level: level,
                add_source,
                level_colours,
                timestamp_format,
                renderer,
            }),
            attrs: Arc::from(Vec::new()),
            groups: Arc::from(Vec::new()),
        }
    }
}

/// Turns events into rendered output on a shared sink
///
/// Cloning is cheap: configuration, sink and state are all behind `Arc`s.
#[derive(Clone)]
pub struct Handler {
    sink: Arc<dyn Sink>,
    config: Arc<HandlerConfig>,
    attrs: Arc<[RecordAttr]>,
    groups: Arc<[String]>,
}

impl Handler {
    /// Handler with default settings writing to `sink`
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self::builder(sink).build()
    }

    pub fn with_options<S: Sink + 'static>(sink: S, options: HandlerOptions) -> Self {
        Self::builder(sink).options(options).build()
    }

    #[must_use]
    pub fn builder<S: Sink + 'static>(sink: S) -> HandlerBuilder {
        HandlerBuilder::shared(Arc::new(sink))
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Attributes inherited through `with_attrs`, oldest first
    pub fn attrs(&self) -> &[RecordAttr] {
        &self.attrs
    }

    /// Active group path, outermost first
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.config.min_level
    }

    /// Derive a handler that also carries `attrs`, tagged with the current group path
    #[must_use]
    pub fn with_attrs(&self, attrs: impl IntoIterator<Item = Attr>) -> Handler {
        let attrs: Arc<[RecordAttr]> = self
            .attrs
            .iter()
            .cloned()
            .chain(
                attrs
                    .into_iter()
                    .map(|attr| RecordAttr::new(Arc::clone(&self.groups), attr)),
            )
            .collect();

        Handler {
            sink: Arc::clone(&self.sink),
            config: Arc::clone(&self.config),
            attrs,
            groups: Arc::clone(&self.groups),
        }
    }

    /// Derive a handler whose later attributes are nested under `name`
    #[must_use]
    pub fn with_group(&self, name: impl Into<String>) -> Handler {
        let groups: Arc<[String]> = self
            .groups
            .iter()
            .cloned()
            .chain(iter::once(name.into()))
            .collect();

        Handler {
            sink: Arc::clone(&self.sink),
            config: Arc::clone(&self.config),
            attrs: Arc::clone(&self.attrs),
            groups,
        }
    }

    /// Flatten an event and this handler's state into a record
    ///
    /// Attribute order: source location (when enabled and known), inherited
    /// attributes, then the event's own non-empty attributes.
    pub fn record(&self, event: &Event) -> Result<Record> {
        let time = match &event.time {
            Some(time) => self.config.timestamp_format.format(time)?,
            None => String::new(),
        };

        let mut attrs = Vec::with_capacity(1 + self.attrs.len() + event.attrs.len());
        if self.config.add_source {
            if let Some(source) = &event.source {
                attrs.push(RecordAttr::ungrouped(SOURCE_KEY, source.to_string()));
            }
        }
        attrs.extend(self.attrs.iter().cloned());
        attrs.extend(
            event
                .attrs
                .iter()
                .filter(|attr| !attr.is_empty())
                .map(|attr| RecordAttr::new(Arc::clone(&self.groups), attr.clone())),
        );

        Ok(Record {
            level: event.level.as_str().to_string(),
            time,
            message: event.message.clone(),
            level_colours: self.config.colours_for(event.level),
            attrs,
        })
    }

    /// Render `event` and write it to the sink in a single call
    ///
    /// Render failures are wrapped in [`LoggerError::Render`] and nothing is
    /// written. Sink failures come back as [`LoggerError::Io`] unchanged.
    /// Level filtering is the caller's job; see [`Handler::enabled`].
    pub fn handle(&self, event: &Event) -> Result<()> {
        let renderer = &self.config.renderer;
        let mut buffer = Vec::with_capacity(256);

        self.record(event)
            .and_then(|record| renderer.render(&mut buffer, &record))
            .map_err(|e| LoggerError::render(renderer.name(), e))?;

        self.sink.write_all(&buffer)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("sink", &self.sink.name())
            .field("config", &self.config)
            .field("attrs", &self.attrs)
            .field("groups", &self.groups)
            .finish()
    }
}
