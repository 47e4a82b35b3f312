//! Style-state stack.
//!
//! One frame per open tag. Each frame stores the escape string that rebuilds
//! the styling active at that depth: the base reset followed by the codes of
//! every tag still open below it, in open order.

use crate::style::RESET;

/// An entry on the style stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Name the matching close tag must use (`b`, `c`, a variable name, …).
    pub tag: String,
    /// Reset plus the codes of every open tag up to and including this one.
    pub cumulative: String,
}

/// Stack of open tags.
///
/// The bottom frame is `("", RESET)` and is never popped.
#[derive(Clone, Debug)]
pub struct StyleStack {
    frames: Vec<Frame>,
}

impl StyleStack {
    /// Create a stack holding only the base frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame {
                tag: String::new(),
                cumulative: RESET.to_string(),
            }],
        }
    }

    fn top(&self) -> &Frame {
        // The base frame is never removed.
        &self.frames[self.frames.len() - 1]
    }

    /// Open a tag whose own escape code is `code`.
    pub fn push(&mut self, tag: impl Into<String>, code: &str) {
        let cumulative = format!("{}{}", self.top().cumulative, code);
        self.frames.push(Frame {
            tag: tag.into(),
            cumulative,
        });
    }

    /// Close the innermost tag.
    ///
    /// Returns `None` when only the base frame is left.
    pub fn pop(&mut self) -> Option<Frame> {
        if self.frames.len() == 1 {
            return None;
        }
        self.frames.pop()
    }

    /// Name of the innermost open tag, `""` when nothing is open.
    pub fn current_tag(&self) -> &str {
        &self.top().tag
    }

    /// Escape string that restores the styling at the current depth.
    pub fn current_save(&self) -> &str {
        &self.top().cumulative
    }

    /// Number of open tags, not counting the base frame.
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }
}

impl Default for StyleStack {
    fn default() -> Self {
        Self::new()
    }
}
