//! Scanner for ziyy markup.
//!
//! Produces one token per call, switching between text mode (outside tags,
//! whitespace kept) and tag mode (inside `<...>`, whitespace skipped).

use super::token::{Token, TokenKind, UNEXPECTED_CHARACTER};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Text,
    Tag,
}

/// Scanner for ziyy markup.
///
/// # Examples
///
/// ```
/// use ziyy_core::parser::{Scanner, TokenKind};
///
/// let kinds: Vec<_> = Scanner::new("<b>hi</b>").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::OpenTag,
///         TokenKind::B,
///         TokenKind::CloseTag,
///         TokenKind::Text,
///         TokenKind::OpenTag,
///         TokenKind::Slash,
///         TokenKind::B,
///         TokenKind::CloseTag,
///         TokenKind::Eof,
///     ]
/// );
/// ```
pub struct Scanner<'a> {
    source: &'a str,
    start: usize,
    pos: usize,
    line: usize,
    mode: Mode,
    escape_pending: bool,
    done: bool,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner over `source`, starting in text mode.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            pos: 0,
            line: 1,
            mode: Mode::Text,
            escape_pending: false,
            done: false,
        }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume one character, counting newlines.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Source text of the token being scanned.
    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.pos]
    }

    fn make_token(&self, kind: TokenKind) -> Token<'a> {
        let token = Token::new(kind, self.lexeme(), self.line);
        log::trace!("scanned {:?} {:?} (line {})", kind, token.content, token.line);
        token
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Consume text up to the next `<` or `\`.
    fn text(&mut self) -> Token<'a> {
        while let Some(c) = self.peek() {
            if c == '<' || c == '\\' {
                break;
            }
            self.advance();
        }
        self.make_token(TokenKind::Text)
    }

    /// Consume an identifier and classify it against the keyword table.
    fn identifier(&mut self) -> Token<'a> {
        while let Some(c) = self.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
                break;
            }
            self.advance();
        }
        self.make_token(TokenKind::keyword(self.lexeme()))
    }

    /// Consume a run of decimal digits.
    fn number(&mut self) -> Token<'a> {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.advance();
        }
        self.make_token(TokenKind::Number)
    }

    /// Scan the next token.
    ///
    /// After [`TokenKind::Eof`] the scanner keeps returning `Eof`; callers
    /// are expected to stop there.
    pub fn scan_token(&mut self) -> Token<'a> {
        if self.escape_pending {
            self.escape_pending = false;
            self.start = self.pos;
            return match self.advance() {
                Some(_) => self.make_token(TokenKind::Text),
                None => self.make_token(TokenKind::Eof),
            };
        }

        if self.mode == Mode::Tag {
            self.skip_whitespace();
        }
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return self.make_token(TokenKind::Eof);
        };

        if c == '<' {
            self.mode = Mode::Tag;
            return self.make_token(TokenKind::OpenTag);
        }

        match self.mode {
            Mode::Text => {
                if c == '\\' {
                    self.escape_pending = true;
                    self.make_token(TokenKind::BackSlash)
                } else {
                    self.text()
                }
            }
            Mode::Tag => match c {
                '>' => {
                    self.mode = Mode::Text;
                    self.make_token(TokenKind::CloseTag)
                }
                c if c.is_ascii_alphabetic() || c == '_' => self.identifier(),
                c if c.is_ascii_digit() => self.number(),
                '(' => self.make_token(TokenKind::LeftParen),
                ')' => self.make_token(TokenKind::RightParen),
                ',' => self.make_token(TokenKind::Comma),
                '.' => self.make_token(TokenKind::Dot),
                '/' => self.make_token(TokenKind::Slash),
                _ => Token::error(self.lexeme(), UNEXPECTED_CHARACTER, self.line),
            },
        }
    }
}

/// Yields tokens up to and including the first `Eof` or `Error`.
impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.scan_token();
        if matches!(token.kind, TokenKind::Eof | TokenKind::Error) {
            self.done = true;
        }
        Some(token)
    }
}
