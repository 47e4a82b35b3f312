//! Parser for ziyy markup.
//!
//! This module contains the token model, the scanner and the single-pass
//! parser that turns markup into escape sequences.

mod markup;
mod scanner;
mod token;

pub use markup::Parser;
pub use scanner::Scanner;
pub use token::{Token, TokenKind, UNEXPECTED_CHARACTER};
