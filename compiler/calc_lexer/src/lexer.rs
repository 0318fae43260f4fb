//! Token scanner.
//!
//! Drives a [`StringReader`] over the input and emits one [`Token`] per
//! recognised unit. At each position, after skipping spaces:
//!
//! 1. Try the symbol table, longest window first (3, then 2, then 1
//!    characters). `sinx` lexes as `sin x`, `pie` as `pi e`.
//! 2. Otherwise a decimal digit starts a number: a run of digits with at
//!    most one `.`. A second `.` ends the literal and is then rejected as an
//!    invalid character. A literal too large for `f64` is rejected as an
//!    invalid number.
//! 3. Otherwise an alphabetic character is a single-letter variable.
//! 4. Anything else is an error.

use calc_ir::{Span, Token, TokenKind};
use calc_lexer_core::StringReader;
use tracing::trace;

use crate::symbols::{self, MAX_SYMBOL_LEN};
use crate::LexError;

/// Lexer state: the reader and the tokens emitted so far.
pub struct Lexer {
    reader: StringReader,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a lexer over `text`.
    pub fn new(text: &str) -> Self {
        Lexer {
            reader: StringReader::new(text),
            tokens: Vec::new(),
        }
    }

    /// Scan the whole input.
    ///
    /// Stops at the first invalid character.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        loop {
            self.reader.skip_whitespace();
            if self.reader.is_eof() {
                break;
            }
            self.lex_token()?;
        }
        Ok(self.tokens)
    }

    fn lex_token(&mut self) -> Result<(), LexError> {
        let start = self.reader.position();

        if let Some((kind, width)) = self.match_symbol()? {
            let lexeme: String = self.reader.read(width)?.iter().collect();
            self.push(lexeme, kind, start);
            return Ok(());
        }

        let c = self.reader.peek()?;
        if c.is_ascii_digit() {
            return self.lex_number(start);
        }
        if c.is_alphabetic() {
            self.reader.next()?;
            self.push(c.to_string(), TokenKind::Variable(c), start);
            return Ok(());
        }

        Err(LexError::invalid_character(c, start))
    }

    /// Longest symbol-table match at the cursor, as `(kind, width)`.
    fn match_symbol(&self) -> Result<Option<(TokenKind, usize)>, LexError> {
        for width in (1..=MAX_SYMBOL_LEN).rev() {
            if self.reader.remaining() < width {
                continue;
            }
            if let Some(kind) = symbols::lookup(self.reader.peek_n(width)?) {
                return Ok(Some((kind, width)));
            }
        }
        Ok(None)
    }

    fn lex_number(&mut self, start: usize) -> Result<(), LexError> {
        let mut seen_dot = false;
        while !self.reader.is_eof() {
            match self.reader.peek()? {
                c if c.is_ascii_digit() => {}
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.reader.next()?;
        }

        let end = self.reader.position();
        let text = self.reader.slice(start, end)?;
        // Overflow to infinity would re-lex as the `inf` constant.
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                self.push(text, TokenKind::Number(value), start);
                Ok(())
            }
            _ => Err(LexError::invalid_number(text, Span::from(start..end))),
        }
    }

    fn push(&mut self, lexeme: String, kind: TokenKind, start: usize) {
        let span = Span::new(start, self.reader.position());
        trace!(?kind, %lexeme, %span, "token");
        self.tokens.push(Token::new(lexeme, kind, span));
    }
}
