//! Parse error types.
//!
//! A [`ParseError`] records WHAT went wrong (`kind`), the index of the token
//! the parser stopped at (`index`, equal to the token count when the input
//! ended early), and that token's source `span` for rendering.

use calc_ir::{BinaryOp, Span, TokenKind};
use thiserror::Error;

/// A syntax error.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{kind} (token {index})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index of the offending token.
    pub index: usize,
    pub span: Span,
}

/// What kind of syntax error occurred.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A token that cannot appear here.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        found: TokenKind,
        expected: &'static str,
    },
    /// Input ended while something was still required.
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: &'static str },
    /// Input ended inside a parenthesised expression.
    #[error("unclosed `(` at token {open_index}")]
    UnclosedParen { open_index: usize },
    /// `a < b < c`: comparisons do not associate.
    #[error("comparison operators cannot be chained (second `{op}`)")]
    ChainedComparison { op: BinaryOp },
    /// No tokens at all.
    #[error("empty expression")]
    Empty,
}

impl ParseError {
    /// Create a new parse error.
    #[cold]
    pub fn new(kind: ParseErrorKind, index: usize, span: Span) -> Self {
        ParseError { kind, index, span }
    }

    /// Human-readable message, without the token index.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests;
