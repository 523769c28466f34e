//! Multi-line, colourised text renderer
//!
//! Layout of one record:
//!
//! ```text
//! INFO [2024-01-01T00:00:00.000Z] started
//!                                 port=8080
//!                                 db.conn.host=localhost
//! ```
//!
//! The level badge is padded to five characters and painted in the record's
//! level colours, the message is bold and every attribute sits on its own
//! line, aligned under the message column.

use super::Renderer;
use crate::core::{Colour, Colours, Record, Result};
use std::io::{self, Write};

/// Minimum width of the level badge
pub const LEVEL_WIDTH: usize = 5;

/// Columns taken by `[`, `] ` around the timestamp
const TIMESTAMP_DECORATION: usize = 3;

/// Where the level text sits inside its padded badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LevelAlign {
    /// `INFO ` (default)
    #[default]
    Left,
    /// ` INFO`
    Right,
}

#[derive(Debug, Clone)]
pub struct PrettyRenderer {
    level_width: usize,
    level_align: LevelAlign,
    message_colours: Colours,
    attr_colours: Colours,
    colours: bool,
}

impl PrettyRenderer {
    pub fn new() -> Self {
        Self {
            level_width: LEVEL_WIDTH,
            level_align: LevelAlign::Left,
            message_colours: Colours::from(Colour::BOLD),
            attr_colours: Colours::from(Colour::FG_BLACK),
            colours: true,
        }
    }

    /// Emit escape sequences or plain text with the same layout
    #[must_use]
    pub fn with_colours(mut self, colours: bool) -> Self {
        self.colours = colours;
        self
    }

    #[must_use]
    pub fn with_level_width(mut self, width: usize) -> Self {
        self.level_width = width;
        self
    }

    #[must_use]
    pub fn with_level_align(mut self, align: LevelAlign) -> Self {
        self.level_align = align;
        self
    }

    #[must_use]
    pub fn with_message_colours(mut self, colours: impl Into<Colours>) -> Self {
        self.message_colours = colours.into();
        self
    }

    #[must_use]
    pub fn with_attr_colours(mut self, colours: impl Into<Colours>) -> Self {
        self.attr_colours = colours.into();
        self
    }

    fn paint(&self, out: &mut dyn Write, colours: &Colours, text: &str) -> io::Result<()> {
        if self.colours {
            colours.write_wrapped(out, text)
        } else {
            out.write_all(text.as_bytes())
        }
    }
}

impl Default for PrettyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PrettyRenderer {
    fn render(&self, out: &mut dyn Write, record: &Record) -> Result<()> {
        let badge = match self.level_align {
            LevelAlign::Left => pad_right(&record.level, self.level_width),
            LevelAlign::Right => pad_left(&record.level, self.level_width),
        };
        self.paint(out, &record.level_colours, &badge)?;
        write!(out, "[{}] ", record.time)?;
        self.paint(out, &self.message_colours, &record.message)?;

        if !record.attrs.is_empty() {
            let indent = spaces(&[
                badge.chars().count(),
                record.time.chars().count(),
                TIMESTAMP_DECORATION,
            ]);
            for attr in &record.attrs {
                out.write_all(b"\n")?;
                out.write_all(indent.as_bytes())?;
                self.paint(out, &self.attr_colours, &attr.to_string())?;
            }
        }

        out.write_all(b"\n")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "pretty"
    }
}

/// Pad `value` with trailing spaces to `width` characters
///
/// Width is a character count, not a display width: wide or combining
/// characters will misalign. Longer values are returned unchanged.
pub fn pad_right(value: &str, width: usize) -> String {
    format!("{:<width$}", value, width = width)
}

/// Pad `value` with leading spaces to `width` characters
pub fn pad_left(value: &str, width: usize) -> String {
    format!("{:>width$}", value, width = width)
}

/// A run of spaces as wide as all `widths` together
pub fn spaces(widths: &[usize]) -> String {
    " ".repeat(widths.iter().sum())
}
