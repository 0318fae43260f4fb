//! Lexer for calc expressions.
//!
//! Turns raw text into a `Vec<Token>` using the fixed symbol table in
//! [`symbols`]. See [`Lexer`] for the scanning rules.

mod lex_error;
mod lexer;
pub mod symbols;

pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;

use calc_ir::Token;

/// Lex `text` into tokens.
///
/// Fails with the first invalid character and its character offset.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}
