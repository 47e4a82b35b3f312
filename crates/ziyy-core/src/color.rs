//! Color escape sequences.
//!
//! Supports the eight basic terminal colors and 24-bit truecolor, each on the
//! foreground or background channel.

use std::borrow::Cow;
use std::fmt::{self, Display};

/// Which half of a cell a color applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Text color, selected with `<c.…>`.
    Foreground,
    /// Cell background, selected with `<x.…>`.
    Background,
}

impl Channel {
    /// The tag name that opens and closes this channel.
    pub fn tag(self) -> &'static str {
        match self {
            Channel::Foreground => "c",
            Channel::Background => "x",
        }
    }
}

/// One of the eight basic terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    /// All basic colors, in SGR order.
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// The markup name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }

    /// Foreground escape sequence (`ESC[30m`..`ESC[37m`).
    pub fn fg(self) -> &'static str {
        match self {
            NamedColor::Black => "\x1b[30m",
            NamedColor::Red => "\x1b[31m",
            NamedColor::Green => "\x1b[32m",
            NamedColor::Yellow => "\x1b[33m",
            NamedColor::Blue => "\x1b[34m",
            NamedColor::Magenta => "\x1b[35m",
            NamedColor::Cyan => "\x1b[36m",
            NamedColor::White => "\x1b[37m",
        }
    }

    /// Background escape sequence (`ESC[40m`..`ESC[47m`).
    pub fn bg(self) -> &'static str {
        match self {
            NamedColor::Black => "\x1b[40m",
            NamedColor::Red => "\x1b[41m",
            NamedColor::Green => "\x1b[42m",
            NamedColor::Yellow => "\x1b[43m",
            NamedColor::Blue => "\x1b[44m",
            NamedColor::Magenta => "\x1b[45m",
            NamedColor::Cyan => "\x1b[46m",
            NamedColor::White => "\x1b[47m",
        }
    }

    /// Escape sequence for the given channel.
    pub fn escape(self, channel: Channel) -> &'static str {
        match channel {
            Channel::Foreground => self.fg(),
            Channel::Background => self.bg(),
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color as written in a `<c.…>` or `<x.…>` tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color<'a> {
    /// Basic color (`red`, `blue`, …).
    Named(NamedColor),
    /// Truecolor components as decimal digit runs.
    ///
    /// Components are not range-checked; any value, even one wider than a
    /// machine integer, is written into the escape sequence as given.
    Rgb(&'a str, &'a str, &'a str),
}

impl<'a> Color<'a> {
    /// Truecolor from three decimal digit runs, leading zeros stripped.
    ///
    /// ```
    /// use ziyy_core::Color;
    ///
    /// assert_eq!(Color::rgb("007", "0", "000"), Color::Rgb("7", "0", "0"));
    /// ```
    pub fn rgb(r: &'a str, g: &'a str, b: &'a str) -> Self {
        Color::Rgb(decimal(r), decimal(g), decimal(b))
    }

    /// Escape sequence selecting this color on the given channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use ziyy_core::{Channel, Color, NamedColor};
    ///
    /// assert_eq!(Color::Named(NamedColor::Red).escape(Channel::Foreground), "\x1b[31m");
    /// assert_eq!(Color::rgb("1", "2", "3").escape(Channel::Background), "\x1b[48;2;1;2;3m");
    /// ```
    pub fn escape(&self, channel: Channel) -> Cow<'static, str> {
        match *self {
            Color::Named(named) => Cow::Borrowed(named.escape(channel)),
            Color::Rgb(r, g, b) => Cow::Owned(match channel {
                Channel::Foreground => rgb_fg(r, g, b),
                Channel::Background => rgb_bg(r, g, b),
            }),
        }
    }
}

/// Strip leading zeros from a digit run, keeping a lone `0`.
fn decimal(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Truecolor foreground sequence: `ESC[38;2;R;G;Bm`.
pub fn rgb_fg(r: impl Display, g: impl Display, b: impl Display) -> String {
    format!("\x1b[38;2;{r};{g};{b}m")
}

/// Truecolor background sequence: `ESC[48;2;R;G;Bm`.
pub fn rgb_bg(r: impl Display, g: impl Display, b: impl Display) -> String {
    format!("\x1b[48;2;{r};{g};{b}m")
}
