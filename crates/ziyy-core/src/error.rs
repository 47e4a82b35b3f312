//! Error types for markup compilation.

use thiserror::Error;

/// Errors that abort a compile run.
///
/// Output written before the error stays in the sink.
#[derive(Debug, Error)]
pub enum ZiyyError {
    /// A character inside a tag that starts no token.
    #[error("line {line}: unexpected character {ch:?} in tag")]
    UnexpectedCharacter { ch: String, line: usize },

    /// A token that the tag grammar does not allow at this point.
    #[error("line {line}: expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: usize,
    },

    /// End of input before the tag's closing `>`.
    #[error("line {line}: unterminated tag")]
    UnterminatedTag { line: usize },

    /// A variable tag with no binding.
    #[error("line {line}: undefined variable `{name}`")]
    UndefinedVariable { name: String, line: usize },

    /// A close tag that does not match the innermost open tag.
    #[error("line {line}: cannot close `{found}` while `{expected}` is open")]
    MismatchedClose {
        expected: String,
        found: String,
        line: usize,
    },

    /// The output sink rejected a write.
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

/// Broad family of a [`ZiyyError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognised character in a tag.
    Lexical,
    /// Malformed tag: missing `>`, bad `rgb(...)` arguments, and so on.
    Structural,
    /// Reference to an unbound variable.
    Reference,
    /// Close tag out of order.
    Nesting,
    /// Output could not be produced.
    Io,
}

impl ZiyyError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZiyyError::UnexpectedCharacter { .. } => ErrorKind::Lexical,
            ZiyyError::UnexpectedToken { .. }
            | ZiyyError::UnterminatedTag { .. } => ErrorKind::Structural,
            ZiyyError::UndefinedVariable { .. } => ErrorKind::Reference,
            ZiyyError::MismatchedClose { .. } => ErrorKind::Nesting,
            ZiyyError::Io(_) => ErrorKind::Io,
        }
    }

    /// Source line the error was raised on, when it came from the markup.
    pub fn line(&self) -> Option<usize> {
        match self {
            ZiyyError::UnexpectedCharacter { line, .. }
            | ZiyyError::UnexpectedToken { line, .. }
            | ZiyyError::UnterminatedTag { line }
            | ZiyyError::UndefinedVariable { line, .. }
            | ZiyyError::MismatchedClose { line, .. } => Some(*line),
            ZiyyError::Io(_) => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ZiyyError>;
