//! Lexer error types.
//!
//! A [`LexError`] pairs WHAT went wrong (`kind`) with WHERE (`span`, in
//! character offsets). Lexing stops at the first error.

use calc_ir::Span;
use calc_lexer_core::ReaderError;
use thiserror::Error;

/// A lexer error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("{kind} at offset {}", .span.start)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// Character that is not whitespace, a digit, a letter, or a symbol.
    #[error("invalid character {ch:?}")]
    InvalidCharacter { ch: char },
    /// Scanned digit run that does not parse as a number.
    #[error("malformed number `{text}`")]
    InvalidNumber { text: String },
    /// The reader rejected a request the lexer made. Indicates a lexer bug.
    #[error("internal lexer error: {0}")]
    Internal(ReaderError),
}

impl LexError {
    /// Create an error for an unrecognised character at `offset`.
    #[cold]
    pub fn invalid_character(ch: char, offset: usize) -> Self {
        LexError {
            kind: LexErrorKind::InvalidCharacter { ch },
            span: Span::new(offset, offset + 1),
        }
    }

    /// Create an error for a digit run that failed to parse.
    #[cold]
    pub fn invalid_number(text: impl Into<String>, span: Span) -> Self {
        LexError {
            kind: LexErrorKind::InvalidNumber { text: text.into() },
            span,
        }
    }

    /// Character offset where the error starts.
    #[inline]
    pub fn offset(&self) -> usize {
        self.span.start
    }

    /// The offending character, for `InvalidCharacter` errors.
    pub fn character(&self) -> Option<char> {
        match self.kind {
            LexErrorKind::InvalidCharacter { ch } => Some(ch),
            LexErrorKind::InvalidNumber { .. } | LexErrorKind::Internal(_) => None,
        }
    }
}

impl From<ReaderError> for LexError {
    #[cold]
    fn from(err: ReaderError) -> Self {
        let span = match &err {
            ReaderError::OutOfRange { position, .. } => Span::point(*position),
            ReaderError::InvalidArgument { .. } => Span::DUMMY,
        };
        LexError {
            kind: LexErrorKind::Internal(err),
            span,
        }
    }
}
