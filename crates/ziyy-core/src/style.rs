//! Text style modifiers and the global reset.
//!
//! Bold, italic, underline and strike are independent terminal channels, so
//! each one has a fixed ON and OFF sequence that is valid at any nesting depth.

/// Resets every attribute to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Text styling attribute toggled by a single-letter tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modifier {
    /// `<b>`
    Bold,
    /// `<i>`
    Italic,
    /// `<s>`
    Strike,
    /// `<u>`
    Underline,
}

impl Modifier {
    /// The tag letter for this modifier.
    pub fn marker(self) -> &'static str {
        match self {
            Modifier::Bold => "b",
            Modifier::Italic => "i",
            Modifier::Strike => "s",
            Modifier::Underline => "u",
        }
    }

    /// Sequence that switches the modifier on.
    pub fn on(self) -> &'static str {
        match self {
            Modifier::Bold => "\x1b[1m",
            Modifier::Italic => "\x1b[3m",
            Modifier::Strike => "\x1b[9m",
            Modifier::Underline => "\x1b[4m",
        }
    }

    /// Sequence that switches the modifier off without touching anything else.
    pub fn off(self) -> &'static str {
        match self {
            Modifier::Bold => "\x1b[22m",
            Modifier::Italic => "\x1b[23m",
            Modifier::Strike => "\x1b[29m",
            Modifier::Underline => "\x1b[24m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers() {
        assert_eq!(Modifier::Bold.marker(), "b");
        assert_eq!(Modifier::Strike.marker(), "s");
    }

    #[test]
    fn on_off_codes() {
        assert_eq!(Modifier::Bold.on(), "\x1b[1m");
        assert_eq!(Modifier::Bold.off(), "\x1b[22m");
        assert_eq!(Modifier::Underline.on(), "\x1b[4m");
        assert_eq!(Modifier::Underline.off(), "\x1b[24m");
    }
}
