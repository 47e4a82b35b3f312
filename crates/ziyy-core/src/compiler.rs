//! Compile entry points.

use std::io::Write;

use crate::bindings::Bindings;
use crate::error::Result;
use crate::parser::Parser;

/// Compile `source` into `out`, resolving variable tags through `bindings`.
///
/// Output is streamed: on error, everything written before the failing
/// token is already in `out`.
///
/// # Examples
///
/// ```
/// use ziyy_core::{compile, Bindings};
///
/// let mut out = Vec::new();
/// compile("<c.red>Hi</c>", &mut out, &Bindings::new()).unwrap();
/// assert_eq!(out, b"\x1b[0m\x1b[31mHi\x1b[0m\x1b[0m");
/// ```
pub fn compile<W: Write>(source: &str, out: &mut W, bindings: &Bindings) -> Result<()> {
    Parser::new(source, out, bindings).parse()
}

/// Render `source` to a string with no variables bound.
///
/// # Examples
///
/// ```
/// use ziyy_core::style;
///
/// let text = style("<b>Hello</b>").unwrap();
/// assert_eq!(text, "\x1b[0m\x1b[1mHello\x1b[22m\x1b[0m");
/// ```
pub fn style(source: &str) -> Result<String> {
    style_with(source, &Bindings::new())
}

/// Render `source` to a string using `bindings`.
pub fn style_with(source: &str, bindings: &Bindings) -> Result<String> {
    let mut out = Vec::with_capacity(source.len() + 16);
    compile(source, &mut out, bindings)?;
    // Only `str` slices and escape strings reach the sink, so this never
    // replaces anything.
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Build a renderer that prefixes every text with `prefix`.
///
/// # Examples
///
/// ```
/// use ziyy_core::{style, template};
///
/// let bold_red = template("<b><c.red>");
/// assert_eq!(bold_red("hi").unwrap(), style("<b><c.red>hi").unwrap());
/// ```
pub fn template(prefix: &str) -> impl Fn(&str) -> Result<String> + '_ {
    move |text: &str| style(&format!("{prefix}{text}"))
}

/// A sink and bindings table reused across compile runs.
///
/// Each [`compile`](Compiler::compile) call is an independent run with its
/// own scanner and style stack; only the sink and bindings carry over.
///
/// ```
/// use ziyy_core::{Bindings, Compiler};
///
/// let bindings = Bindings::new();
/// let mut compiler = Compiler::new(Vec::new(), &bindings);
/// compiler.compile("a").unwrap();
/// compiler.compile("b").unwrap();
/// assert_eq!(compiler.into_inner(), b"\x1b[0ma\x1b[0m\x1b[0mb\x1b[0m");
/// ```
pub struct Compiler<'b, W: Write> {
    out: W,
    bindings: &'b Bindings,
}

impl<'b, W: Write> Compiler<'b, W> {
    /// Create a compiler writing every run to `out`.
    pub fn new(out: W, bindings: &'b Bindings) -> Self {
        Self { out, bindings }
    }

    /// Compile one source into the sink.
    pub fn compile(&mut self, source: &str) -> Result<()> {
        compile(source, &mut self.out, self.bindings)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
