//! ANSI colour and style codes
//!
//! A [`Colour`] is a single SGR parameter; a [`Colours`] sequence joins several
//! of them into one escape directive such as `\x1b[1;36m`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

const ESCAPE: &str = "\x1b";
const RESET_SEQUENCE: &str = "\x1b[0m";

/// A single SGR (Select Graphic Rendition) code
///
/// Any value is accepted and emitted as-is; the constants below cover the
/// text attributes and the 8-colour foreground/background palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colour(pub i32);

impl Colour {
    // Text attributes
    pub const RESET: Colour = Colour(0);
    pub const BOLD: Colour = Colour(1);
    pub const FAINT: Colour = Colour(2);
    pub const ITALIC: Colour = Colour(3);
    pub const UNDERLINE: Colour = Colour(4);
    pub const BLINK_SLOW: Colour = Colour(5);
    pub const BLINK_RAPID: Colour = Colour(6);
    pub const REVERSE_VIDEO: Colour = Colour(7);
    pub const CONCEALED: Colour = Colour(8);
    pub const CROSSED_OUT: Colour = Colour(9);

    // Foreground
    pub const FG_BLACK: Colour = Colour(30);
    pub const FG_RED: Colour = Colour(31);
    pub const FG_GREEN: Colour = Colour(32);
    pub const FG_YELLOW: Colour = Colour(33);
    pub const FG_BLUE: Colour = Colour(34);
    pub const FG_MAGENTA: Colour = Colour(35);
    pub const FG_CYAN: Colour = Colour(36);
    pub const FG_WHITE: Colour = Colour(37);

    // Background
    pub const BG_BLACK: Colour = Colour(40);
    pub const BG_RED: Colour = Colour(41);
    pub const BG_GREEN: Colour = Colour(42);
    pub const BG_YELLOW: Colour = Colour(43);
    pub const BG_BLUE: Colour = Colour(44);
    pub const BG_MAGENTA: Colour = Colour(45);
    pub const BG_CYAN: Colour = Colour(46);
    pub const BG_WHITE: Colour = Colour(47);

    // High-intensity foreground
    pub const FG_HI_BLACK: Colour = Colour(90);
    pub const FG_HI_RED: Colour = Colour(91);
    pub const FG_HI_GREEN: Colour = Colour(92);
    pub const FG_HI_YELLOW: Colour = Colour(93);
    pub const FG_HI_BLUE: Colour = Colour(94);
    pub const FG_HI_MAGENTA: Colour = Colour(95);
    pub const FG_HI_CYAN: Colour = Colour(96);
    pub const FG_HI_WHITE: Colour = Colour(97);

    // High-intensity background
    pub const BG_HI_BLACK: Colour = Colour(100);
    pub const BG_HI_RED: Colour = Colour(101);
    pub const BG_HI_GREEN: Colour = Colour(102);
    pub const BG_HI_YELLOW: Colour = Colour(103);
    pub const BG_HI_BLUE: Colour = Colour(104);
    pub const BG_HI_MAGENTA: Colour = Colour(105);
    pub const BG_HI_CYAN: Colour = Colour(106);
    pub const BG_HI_WHITE: Colour = Colour(107);

    #[inline]
    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Colour {
    fn from(code: i32) -> Self {
        Colour(code)
    }
}

/// An ordered sequence of colour codes rendered as one escape directive
///
/// Order is preserved and nothing is deduplicated: `[FG_RED, FG_CYAN]`
/// emits both codes and leaves it to the terminal to decide which wins.
///
/// # Example
///
/// ```
/// use pretty_logger::{Colour, Colours};
///
/// let colours = Colours::from([Colour::BOLD, Colour::FG_CYAN]);
/// assert_eq!(colours.format(), "\x1b[1;36m");
/// assert_eq!(colours.wrap("hi"), "\x1b[1;36mhi\x1b[0m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Colours(Vec<Colour>);

impl Colours {
    pub fn new(colours: Vec<Colour>) -> Self {
        Self(colours)
    }

    /// Sequence used when a level has no configured colours
    pub fn fallback() -> Self {
        Self(vec![Colour::FG_BLACK])
    }

    pub fn as_slice(&self) -> &[Colour] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build the start sequence, `ESC[` + codes joined by `;` + `m`
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = String::with_capacity(3 + self.0.len() * 4);
        out.push_str(ESCAPE);
        out.push('[');
        for (i, colour) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            out.push_str(&colour.0.to_string());
        }
        out.push('m');
        out
    }

    /// The reset sequence, independent of any colour content
    #[inline]
    pub fn reset() -> &'static str {
        RESET_SEQUENCE
    }

    /// Wrap `text` in this sequence and a trailing reset
    #[must_use]
    pub fn wrap(&self, text: impl fmt::Display) -> String {
        format!("{}{}{}", self.format(), text, RESET_SEQUENCE)
    }

    /// Streaming form of [`Colours::wrap`]
    pub fn write_wrapped(&self, out: &mut dyn Write, text: &str) -> io::Result<()> {
        out.write_all(self.format().as_bytes())?;
        out.write_all(text.as_bytes())?;
        out.write_all(RESET_SEQUENCE.as_bytes())
    }
}

impl From<Vec<Colour>> for Colours {
    fn from(colours: Vec<Colour>) -> Self {
        Self(colours)
    }
}

impl<const N: usize> From<[Colour; N]> for Colours {
    fn from(colours: [Colour; N]) -> Self {
        Self(colours.to_vec())
    }
}

impl From<Colour> for Colours {
    fn from(colour: Colour) -> Self {
        Self(vec![colour])
    }
}

impl FromIterator<Colour> for Colours {
    fn from_iter<I: IntoIterator<Item = Colour>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_joins_codes() {
        let colours = Colours::from([Colour::BOLD, Colour::UNDERLINE, Colour::FG_RED]);
        assert_eq!(colours.format(), "\x1b[1;4;31m");
    }

    #[test]
    fn test_format_empty_sequence() {
        assert_eq!(Colours::default().format(), "\x1b[m");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let colours = Colours::from([Colour::FG_RED, Colour::FG_CYAN, Colour::FG_RED]);
        assert_eq!(colours.format(), "\x1b[31;36;31m");
    }

    #[test]
    fn test_unnamed_codes_pass_through() {
        let colours = Colours::from([Colour(38), Colour(5), Colour(208)]);
        assert_eq!(colours.format(), "\x1b[38;5;208m");
    }

    #[test]
    fn test_codes_outside_byte_range() {
        let colours: Colours = serde_json::from_str("[38, 2, 300]").unwrap();
        assert_eq!(colours.as_slice(), [Colour(38), Colour(2), Colour(300)]);
        assert_eq!(colours.format(), "\x1b[38;2;300m");

        let negative = Colours::from(Colour(-1));
        assert_eq!(negative.format(), "\x1b[-1m");
    }

    #[test]
    fn test_reset_is_constant() {
        assert_eq!(Colours::reset(), "\x1b[0m");
    }

    #[test]
    fn test_wrap() {
        let colours = Colours::from(Colour::FG_YELLOW);
        assert_eq!(colours.wrap("warn"), "\x1b[33mwarn\x1b[0m");
    }

    #[test]
    fn test_write_wrapped_matches_wrap() {
        let colours = Colours::from([Colour::BG_HI_BLUE, Colour::FG_HI_WHITE]);
        let mut buffer = Vec::new();
        colours.write_wrapped(&mut buffer, "text").unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), colours.wrap("text"));
    }

    #[test]
    fn test_palette_ranges() {
        assert_eq!(Colour::CROSSED_OUT.code(), 9);
        assert_eq!(Colour::FG_WHITE.code(), 37);
        assert_eq!(Colour::BG_WHITE.code(), 47);
        assert_eq!(Colour::FG_HI_WHITE.code(), 97);
        assert_eq!(Colour::BG_HI_WHITE.code(), 107);
    }

    #[test]
    fn test_serde_transparent() {
        let colours = Colours::from([Colour::BOLD, Colour::FG_CYAN]);
        let json = serde_json::to_string(&colours).unwrap();
        assert_eq!(json, "[1,36]");
        let decoded: Colours = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, colours);
    }
}
