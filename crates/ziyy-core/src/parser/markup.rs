//! Markup parser and evaluator.
//!
//! Pulls tokens from the [`Scanner`] one at a time, checks them against the
//! tag grammar and streams escape sequences and text straight to the sink.
//! No syntax tree is built; the only state is the [`StyleStack`].

use std::io::Write;

use crate::bindings::Bindings;
use crate::color::{Channel, Color};
use crate::error::{Result, ZiyyError};
use crate::state::StyleStack;
use crate::style::{Modifier, RESET};

use super::scanner::Scanner;
use super::token::{Token, TokenKind};

/// Single-pass markup parser writing to `W`.
///
/// # Examples
///
/// ```
/// use ziyy_core::Bindings;
/// use ziyy_core::parser::Parser;
///
/// let bindings = Bindings::new();
/// let mut out = Vec::new();
/// Parser::new("<b>hi</b>", &mut out, &bindings).parse().unwrap();
/// assert_eq!(out, b"\x1b[0m\x1b[1mhi\x1b[22m\x1b[0m");
/// ```
pub struct Parser<'a, 'b, W: Write> {
    scanner: Scanner<'a>,
    out: &'b mut W,
    stack: StyleStack,
    bindings: &'b Bindings,
}

impl<'a, 'b, W: Write> Parser<'a, 'b, W> {
    /// Create a parser over `source` that writes to `out` and resolves
    /// variable tags through `bindings`.
    pub fn new(source: &'a str, out: &'b mut W, bindings: &'b Bindings) -> Self {
        Self {
            scanner: Scanner::new(source),
            out,
            stack: StyleStack::new(),
            bindings,
        }
    }

    /// Run the whole source through to the sink.
    ///
    /// Stops at the first error. Whatever was written before it stays
    /// written.
    pub fn parse(&mut self) -> Result<()> {
        log::debug!("compile run started");
        let result = self.run();
        match &result {
            Ok(()) => log::debug!("compile run finished"),
            Err(err) => log::debug!("compile run aborted: {err}"),
        }
        result
    }

    fn run(&mut self) -> Result<()> {
        self.out.write_all(RESET.as_bytes())?;
        loop {
            let token = self.scanner.scan_token();
            match token.kind {
                TokenKind::Text => self.out.write_all(token.content.as_bytes())?,
                TokenKind::BackSlash => {}
                TokenKind::OpenTag => self.tag()?,
                TokenKind::Eof => {
                    self.out.write_all(RESET.as_bytes())?;
                    return Ok(());
                }
                _ => return Err(unexpected(token, "text or tag")),
            }
        }
    }

    /// Dispatch on the first token after `<`.
    fn tag(&mut self) -> Result<()> {
        let token = self.scanner.scan_token();
        if let Some(modifier) = token.kind.modifier() {
            return self.modifier_tag(modifier);
        }
        match token.kind {
            TokenKind::C => self.color_tag(Channel::Foreground),
            TokenKind::X => self.color_tag(Channel::Background),
            TokenKind::Slash => self.close_tag(),
            kind if kind.is_variable_name() => self.variable_tag(token),
            _ => Err(unexpected(token, "tag name")),
        }
    }

    /// `<b>`, `<i>`, `<s>`, `<u>`
    fn modifier_tag(&mut self, modifier: Modifier) -> Result<()> {
        self.open(modifier.marker(), modifier.on())?;
        self.expect(TokenKind::CloseTag, "`>`")?;
        Ok(())
    }

    /// `<c.COLOR>` and `<x.COLOR>`
    fn color_tag(&mut self, channel: Channel) -> Result<()> {
        self.expect(TokenKind::Dot, "`.`")?;

        let token = self.scanner.scan_token();
        let color = match token.kind.named_color() {
            Some(named) => Color::Named(named),
            None if token.kind == TokenKind::Rgb => self.rgb_arguments()?,
            None => return Err(unexpected(token, "color name or `rgb`")),
        };

        let code = color.escape(channel);
        self.open(channel.tag(), &code)?;
        self.expect(TokenKind::CloseTag, "`>`")?;
        Ok(())
    }

    /// `(R, G, B)` after `rgb`.
    fn rgb_arguments(&mut self) -> Result<Color<'a>> {
        self.expect(TokenKind::LeftParen, "`(`")?;
        let r = self.expect(TokenKind::Number, "number")?;
        self.expect(TokenKind::Comma, "`,`")?;
        let g = self.expect(TokenKind::Number, "number")?;
        self.expect(TokenKind::Comma, "`,`")?;
        let b = self.expect(TokenKind::Number, "number")?;
        self.expect(TokenKind::RightParen, "`)`")?;
        Ok(Color::rgb(r.content, g.content, b.content))
    }

    /// `<name>` resolved through the bindings.
    fn variable_tag(&mut self, name: Token<'a>) -> Result<()> {
        let bindings = self.bindings;
        let Some(value) = bindings.resolve(name.content) else {
            return Err(ZiyyError::UndefinedVariable {
                name: name.content.to_string(),
                line: name.line,
            });
        };
        self.open(name.content, value)?;
        self.expect(TokenKind::CloseTag, "`>`")?;
        Ok(())
    }

    /// `</name>`
    fn close_tag(&mut self) -> Result<()> {
        let token = self.scanner.scan_token();
        let closable = token.kind.modifier().is_some()
            || matches!(token.kind, TokenKind::C | TokenKind::X)
            || token.kind.is_variable_name();
        if !closable {
            return Err(unexpected(token, "tag name"));
        }

        if self.stack.current_tag() != token.content {
            return Err(ZiyyError::MismatchedClose {
                expected: self.stack.current_tag().to_string(),
                found: token.content.to_string(),
                line: token.line,
            });
        }

        let frame = self.stack.pop();
        debug_assert!(frame.is_some(), "close `{}` reached the base frame", token.content);
        if let Some(frame) = frame {
            log::trace!("close `{}` (depth {})", frame.tag, self.stack.depth());
        }

        // Modifiers are independent channels; everything else replays the
        // styling of the enclosing depth.
        match token.kind.modifier() {
            Some(modifier) => self.out.write_all(modifier.off().as_bytes())?,
            None => self.out.write_all(self.stack.current_save().as_bytes())?,
        }

        self.expect(TokenKind::CloseTag, "`>`")?;
        Ok(())
    }

    fn open(&mut self, tag: &str, code: &str) -> Result<()> {
        self.stack.push(tag, code);
        log::trace!("open `{}` (depth {})", tag, self.stack.depth());
        self.out.write_all(code.as_bytes())?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token<'a>> {
        let token = self.scanner.scan_token();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(unexpected(token, expected))
        }
    }
}

fn unexpected(token: Token<'_>, expected: &'static str) -> ZiyyError {
    match token.kind {
        TokenKind::Error => ZiyyError::UnexpectedCharacter {
            ch: token.content.to_string(),
            line: token.line,
        },
        TokenKind::Eof => ZiyyError::UnterminatedTag { line: token.line },
        _ => ZiyyError::UnexpectedToken {
            expected,
            found: token.describe(),
            line: token.line,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NamedColor;

    fn render(input: &str) -> Result<String> {
        let bindings = Bindings::new().with("warn", "<W>");
        let mut out = Vec::new();
        Parser::new(input, &mut out, &bindings).parse()?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn partial(input: &str) -> (String, ZiyyError) {
        let bindings = Bindings::new();
        let mut out = Vec::new();
        let err = Parser::new(input, &mut out, &bindings).parse().unwrap_err();
        (String::from_utf8(out).unwrap(), err)
    }

    #[test]
    fn plain_text_is_wrapped_in_resets() {
        assert_eq!(render("Hello").unwrap(), "\x1b[0mHello\x1b[0m");
    }

    #[test]
    fn empty_input() {
        assert_eq!(render("").unwrap(), "\x1b[0m\x1b[0m");
    }

    #[test]
    fn modifiers() {
        assert_eq!(render("<i>a</i>").unwrap(), "\x1b[0m\x1b[3ma\x1b[23m\x1b[0m");
        assert_eq!(render("<s>a</s>").unwrap(), "\x1b[0m\x1b[9ma\x1b[29m\x1b[0m");
        assert_eq!(render("<u>a</u>").unwrap(), "\x1b[0m\x1b[4ma\x1b[24m\x1b[0m");
    }

    #[test]
    fn named_background() {
        assert_eq!(
            render("<x.blue>a</x>").unwrap(),
            format!("\x1b[0m{}a\x1b[0m\x1b[0m", NamedColor::Blue.bg())
        );
    }

    #[test]
    fn nested_colors_restore_outer_color() {
        assert_eq!(
            render("<c.red>a<c.blue>b</c>c</c>").unwrap(),
            "\x1b[0m\x1b[31ma\x1b[34mb\x1b[0m\x1b[31mc\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn variable_tag() {
        assert_eq!(render("<warn>a</warn>").unwrap(), "\x1b[0m<W>a\x1b[0m\x1b[0m");
    }

    #[test]
    fn unclosed_tags_end_with_reset() {
        assert_eq!(render("<b>a").unwrap(), "\x1b[0m\x1b[1ma\x1b[0m");
    }

    #[test]
    fn escaped_open_tag() {
        assert_eq!(render(r"\<b>").unwrap(), "\x1b[0m<b>\x1b[0m");
    }

    #[test]
    fn missing_close_bracket() {
        let (out, err) = partial("<b x>");
        assert_eq!(out, "\x1b[0m\x1b[1m");
        assert!(matches!(err, ZiyyError::UnexpectedToken { expected: "`>`", .. }));
    }

    #[test]
    fn empty_tag() {
        let (_, err) = partial("<>");
        assert!(matches!(err, ZiyyError::UnexpectedToken { expected: "tag name", .. }));
    }

    #[test]
    fn unterminated_tag() {
        let (_, err) = partial("<c.red");
        assert!(matches!(err, ZiyyError::UnterminatedTag { line: 1 }));
    }

    #[test]
    fn color_without_dot() {
        let (_, err) = partial("<c red>");
        assert!(matches!(err, ZiyyError::UnexpectedToken { expected: "`.`", .. }));
    }

    #[test]
    fn unknown_color() {
        let (_, err) = partial("<c.orange>");
        assert!(matches!(
            err,
            ZiyyError::UnexpectedToken { expected: "color name or `rgb`", .. }
        ));
    }

    #[test]
    fn lexical_error() {
        let (out, err) = partial("ok<c.#fff>");
        assert_eq!(out, "\x1b[0mok");
        assert!(matches!(err, ZiyyError::UnexpectedCharacter { ref ch, .. } if ch == "#"));
    }

    #[test]
    fn oversized_component_is_written_verbatim() {
        assert_eq!(
            render("<c.rgb(99999999999,0,0)>x</c>").unwrap(),
            "\x1b[0m\x1b[38;2;99999999999;0;0mx\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn component_leading_zeros_are_dropped() {
        assert_eq!(
            render("<x.rgb(007,000,0)>").unwrap(),
            "\x1b[0m\x1b[48;2;7;0;0m\x1b[0m"
        );
    }

    #[test]
    fn closing_every_tag_returns_to_base() {
        let bindings = Bindings::new().with("warn", "<W>");
        let mut out = Vec::new();
        let mut parser = Parser::new("<c.red><b><warn>a</warn></b></c>", &mut out, &bindings);
        parser.parse().unwrap();
        assert_eq!(parser.stack.depth(), 0);
        assert_eq!(parser.stack.current_tag(), "");
    }

    #[test]
    fn close_with_nothing_open() {
        let (_, err) = partial("</b>");
        assert!(matches!(
            err,
            ZiyyError::MismatchedClose { ref expected, ref found, .. } if expected.is_empty() && found == "b"
        ));
    }

    #[test]
    fn close_with_qualified_name_is_rejected() {
        let (_, err) = partial("<c.red>a</c.red>");
        assert!(matches!(err, ZiyyError::UnexpectedToken { expected: "`>`", .. }));
    }

    #[test]
    fn close_rejects_punctuation() {
        let (_, err) = partial("</(>");
        assert!(matches!(err, ZiyyError::UnexpectedToken { expected: "tag name", .. }));
    }

    #[test]
    fn error_line_numbers() {
        let (_, err) = partial("a\nb\n<nope>");
        assert_eq!(err.line(), Some(3));
    }
}
