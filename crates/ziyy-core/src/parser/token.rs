//! Tokens produced by the scanner.

use phf::phf_map;

use crate::color::NamedColor;
use crate::style::Modifier;

/// Error code carried by an [`TokenKind::Error`] token for a character that
/// starts no token in tag mode.
pub const UNEXPECTED_CHARACTER: u32 = 1;

/// Kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Punctuation.
    LeftParen,
    RightParen,
    Comma,
    OpenTag,
    CloseTag,
    Dot,
    Slash,
    BackSlash,

    // Literals.
    Identifier,
    Number,
    Text,

    // Color keywords.
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Rgb,

    // Tag markers.
    B,
    C,
    I,
    S,
    U,
    X,

    Eof,
    Error,
}

/// Reserved words in tag mode. Anything else is an identifier.
static KEYWORDS: phf::Map<&'static str, TokenKind> = phf_map! {
    "b" => TokenKind::B,
    "c" => TokenKind::C,
    "i" => TokenKind::I,
    "s" => TokenKind::S,
    "u" => TokenKind::U,
    "x" => TokenKind::X,
    "black" => TokenKind::Black,
    "red" => TokenKind::Red,
    "green" => TokenKind::Green,
    "yellow" => TokenKind::Yellow,
    "blue" => TokenKind::Blue,
    "magenta" => TokenKind::Magenta,
    "cyan" => TokenKind::Cyan,
    "white" => TokenKind::White,
    "rgb" => TokenKind::Rgb,
};

impl TokenKind {
    /// Classify an identifier lexeme.
    pub fn keyword(lexeme: &str) -> TokenKind {
        KEYWORDS.get(lexeme).copied().unwrap_or(TokenKind::Identifier)
    }

    /// The basic color this keyword names, if any.
    pub fn named_color(self) -> Option<NamedColor> {
        match self {
            TokenKind::Black => Some(NamedColor::Black),
            TokenKind::Red => Some(NamedColor::Red),
            TokenKind::Green => Some(NamedColor::Green),
            TokenKind::Yellow => Some(NamedColor::Yellow),
            TokenKind::Blue => Some(NamedColor::Blue),
            TokenKind::Magenta => Some(NamedColor::Magenta),
            TokenKind::Cyan => Some(NamedColor::Cyan),
            TokenKind::White => Some(NamedColor::White),
            _ => None,
        }
    }

    /// The style modifier this marker toggles, if any.
    pub fn modifier(self) -> Option<Modifier> {
        match self {
            TokenKind::B => Some(Modifier::Bold),
            TokenKind::I => Some(Modifier::Italic),
            TokenKind::S => Some(Modifier::Strike),
            TokenKind::U => Some(Modifier::Underline),
            _ => None,
        }
    }

    /// True for tokens that may name a variable tag: identifiers plus the
    /// color keywords and `rgb`.
    pub fn is_variable_name(self) -> bool {
        self == TokenKind::Identifier || self == TokenKind::Rgb || self.named_color().is_some()
    }
}

/// A token and the source slice it was scanned from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub content: &'a str,
    /// Non-zero only for [`TokenKind::Error`].
    pub error_code: u32,
    /// 1-based line the token ends on.
    pub line: usize,
}

impl<'a> Token<'a> {
    /// Create a token of `kind` covering `content`.
    pub fn new(kind: TokenKind, content: &'a str, line: usize) -> Self {
        Self {
            kind,
            content,
            error_code: 0,
            line,
        }
    }

    /// Create an [`TokenKind::Error`] token for the offending `content`.
    pub fn error(content: &'a str, error_code: u32, line: usize) -> Self {
        Self {
            kind: TokenKind::Error,
            content,
            error_code,
            line,
        }
    }

    /// How the token reads in a diagnostic.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Eof => "end of input".to_string(),
            TokenKind::Text => "text".to_string(),
            _ => format!("`{}`", self.content),
        }
    }
}
