//! Markup compiler for styling terminal output.
//!
//! This crate turns text with small inline tags into ANSI escape sequences,
//! e.g. `<c.red>Hi <b>you</b></c>` into red text with a bold word.
//!
//! # Overview
//!
//! - `<b>`, `<i>`, `<s>`, `<u>` - bold, italic, strike, underline
//! - `<c.red>` / `<x.red>` - foreground / background color (the eight basic names)
//! - `<c.rgb(255, 87, 51)>` - truecolor foreground (`x.rgb(...)` for background)
//! - `<name>` - variable looked up in a caller-supplied [`Bindings`] table
//! - `</b>`, `</c>`, `</x>`, `</name>` - close the innermost tag
//! - `\<` - literal `<` (any character can be escaped)
//!
//! Closing a color or variable tag restores the full styling that was active
//! before it opened, so `<c.red>a<c.blue>b</c>c</c>` renders `c` in red again.
//! Tags must nest properly; closing anything other than the innermost tag is
//! an error.
//!
//! # Usage
//!
//! ```
//! use ziyy_core::{style, style_with, Bindings, rgb_fg};
//!
//! let text = style("<c.red>Hi</c>").unwrap();
//! assert_eq!(text, "\x1b[0m\x1b[31mHi\x1b[0m\x1b[0m");
//!
//! let bindings = Bindings::new().with("brand", rgb_fg(0, 150, 75));
//! let text = style_with("<brand>ziyy</brand>", &bindings).unwrap();
//! assert!(text.contains("\x1b[38;2;0;150;75m"));
//! ```

pub mod bindings;
pub mod color;
pub mod compiler;
pub mod error;
pub mod parser;
pub mod state;
pub mod style;

// Re-export main types at crate root
pub use bindings::Bindings;
pub use color::{Channel, Color, NamedColor, rgb_bg, rgb_fg};
pub use compiler::{Compiler, compile, style, style_with, template};
pub use error::{ErrorKind, Result, ZiyyError};
pub use state::StyleStack;
pub use style::{Modifier, RESET};
