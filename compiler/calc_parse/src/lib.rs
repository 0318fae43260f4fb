//! Recursive descent parser for calc expressions.
//!
//! Consumes the token stream produced by `calc_lexer` and builds an owned
//! [`Expr`] tree. The grammar and precedence table are documented on the
//! `grammar` module.
//!
//! A successful parse guarantees structure only: every operator has its
//! operands and every function its argument. Numeric validity (`log(0)`,
//! `1 / 0`) is the evaluator's concern.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use calc_ir::{Expr, Span, Token};
use tracing::debug;

/// Parse a token stream into an expression tree.
///
/// The whole stream must form one expression; trailing tokens are an error.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    /// Parse the entire token stream as one expression.
    pub fn parse(mut self) -> Result<Expr, ParseError> {
        if self.cursor.is_at_end() {
            return Err(ParseError::new(ParseErrorKind::Empty, 0, Span::DUMMY));
        }

        let expr = self.parse_expr()?;

        if !self.cursor.is_at_end() {
            return Err(self.unexpected_token("an operator or end of input"));
        }

        debug!(
            tokens = self.cursor.token_count(),
            nodes = expr.node_count(),
            "parsed expression"
        );
        Ok(expr)
    }
}

#[cfg(test)]
mod tests;
