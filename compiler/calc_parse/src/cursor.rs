//! Token cursor for navigating the token stream.
//!
//! Provides token access, lookahead, and consumption. Unlike the reader
//! under the lexer, the token stream has no EOF token: `current()` returns
//! `None` once every token is consumed.

use calc_ir::{Operator, Span, Token, TokenKind};

/// Cursor for navigating tokens.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Get the total number of tokens in the stream.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Index of the current token (equals `token_count()` at the end).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Get the current token's kind.
    #[inline]
    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(|token| token.kind)
    }

    /// Get the current token's operator, if it is one.
    #[inline]
    pub fn current_operator(&self) -> Option<Operator> {
        self.current_kind().and_then(TokenKind::as_operator)
    }

    /// Span of the current token, or a zero-width span just past the last
    /// token at end of input.
    pub fn current_span(&self) -> Span {
        match self.current() {
            Some(token) => token.span,
            None => self.end_span(),
        }
    }

    /// Zero-width span just past the last token.
    pub fn end_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span::DUMMY, |token| Span::point(token.span.end))
    }

    /// Check if at end of token stream.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Check if the current token is the given operator.
    #[inline]
    pub fn check_operator(&self, op: Operator) -> bool {
        self.current_operator() == Some(op)
    }

    /// Advance to the next token. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    /// Consume the current token if it is `op`.
    pub fn eat_operator(&mut self, op: Operator) -> bool {
        if self.check_operator(op) {
            self.advance();
            true
        } else {
            false
        }
    }
}
