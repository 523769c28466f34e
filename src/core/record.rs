//! Renderer-ready snapshot of one log event

use super::attr::RecordAttr;
use super::colour::Colours;

/// A flattened log event
///
/// Built fresh by the handler for every event and discarded after rendering.
/// Renderers only ever see a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Level text, e.g. `INFO`
    pub level: String,
    /// Formatted timestamp, empty when the event had none
    pub time: String,
    pub message: String,
    /// Colours resolved for this record's level
    pub level_colours: Colours,
    /// Source location, inherited attributes, then event attributes
    pub attrs: Vec<RecordAttr>,
}

impl Record {
    pub fn new(level: impl Into<String>, time: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            time: time.into(),
            message: message.into(),
            level_colours: Colours::fallback(),
            attrs: Vec::new(),
        }
    }

    pub fn with_level_colours(mut self, colours: Colours) -> Self {
        self.level_colours = colours;
        self
    }

    pub fn with_attr(mut self, attr: RecordAttr) -> Self {
        self.attrs.push(attr);
        self
    }
}
