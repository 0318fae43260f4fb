//! Pipeline-wide error type.

use calc_eval::EvalError;
use calc_ir::Span;
use calc_lexer::LexError;
use calc_parse::ParseError;
use thiserror::Error;

/// Any failure from text to number.
///
/// Each phase's error converts into this with `?`, so a front-end can run
/// the whole pipeline in one function and still match on the phase.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    /// Source location of the error, when it has one.
    ///
    /// Evaluation errors refer to the tree, not to source text, and have no
    /// span.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => Some(err.span),
            Error::Parse(err) => Some(err.span),
            Error::Eval(_) => None,
        }
    }
}
