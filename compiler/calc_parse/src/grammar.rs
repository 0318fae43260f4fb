//! Expression grammar.
//!
//! Recursive descent with one method per precedence level, lowest first:
//!
//! ```text
//! expr           = comparison
//! comparison     = additive [ ("=" | "<" | ">") additive ]
//! additive       = multiplicative { ("+" | "-") multiplicative }
//! multiplicative = unary { ("*" | "/") unary }
//! unary          = ("+" | "-") unary | power
//! power          = primary [ "^" unary ]
//! primary        = number | variable | constant
//!                | function primary
//!                | "(" expr ")"
//! ```
//!
//! `^` is right-associative (`2 ^ 3 ^ 2` is `2 ^ 9`) and binds tighter than
//! a sign (`-2 ^ 2` is `-4`). Whether `+`/`-` is a sign or a binary
//! operator depends only on position: where an operand is expected it is a
//! sign.
//!
//! A function applies to a single primary, so `sin x ^ 2` is `(sin x) ^ 2`.

use calc_ir::{BinaryOp, Expr, Operator, Sign, TokenKind};
use calc_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse a full expression.
    ///
    /// Uses `ensure_sufficient_stack` so deeply nested parentheses cannot
    /// overflow the stack.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_comparison())
    }

    /// Parse `=`, `<`, `>` (lowest precedence, non-associative).
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_additive()?;

        let Some(op) = self.match_comparison_op() else {
            return Ok(left);
        };
        self.cursor.advance();
        let right = self.parse_additive()?;

        if let Some(second) = self.match_comparison_op() {
            return Err(ParseError::new(
                ParseErrorKind::ChainedComparison { op: second },
                self.cursor.position(),
                self.cursor.current_span(),
            ));
        }

        trace!(%op, "binary");
        Ok(Expr::binary(op, left, right))
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            trace!(%op, "binary");
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*` and `/`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            trace!(%op, "binary");
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse a prefix sign. Signs may repeat: `--2` is `-(-2)`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(sign) = self.match_sign() {
            self.cursor.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(sign, operand));
        }

        self.parse_power()
    }

    /// Parse `^`. The exponent is a unary expression, which makes the
    /// operator right-associative and allows `2 ^ -1`.
    fn parse_power(&mut self) -> Result<Expr, ParseError> {
        let base = self.parse_primary("an operand")?;

        if self.cursor.eat_operator(Operator::Power) {
            let exponent = ensure_sufficient_stack(|| self.parse_unary())?;
            trace!(op = %BinaryOp::Pow, "binary");
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }

        Ok(base)
    }

    /// Parse a primary: the smallest unit that can stand alone.
    ///
    /// `expected` names what the caller wanted, for the error message.
    fn parse_primary(&mut self, expected: &'static str) -> Result<Expr, ParseError> {
        let Some(token) = self.cursor.current() else {
            return Err(self.unexpected_eof(expected));
        };
        trace!(index = self.cursor.position(), kind = %token.kind, "primary");

        match token.kind {
            TokenKind::Number(value) => {
                self.cursor.advance();
                Ok(Expr::Number(value))
            }
            TokenKind::Variable(name) => {
                self.cursor.advance();
                Ok(Expr::Variable(name.to_string()))
            }
            TokenKind::Constant(constant) => {
                self.cursor.advance();
                Ok(Expr::Constant(constant))
            }
            TokenKind::Function(function) => {
                self.cursor.advance();
                let argument =
                    ensure_sufficient_stack(|| self.parse_primary("a function argument"))?;
                Ok(Expr::call(function, argument))
            }
            TokenKind::Operator(Operator::LeftParen) => self.parse_parenthesized(),
            TokenKind::Operator(_) => Err(self.unexpected_token(expected)),
        }
    }

    /// Parse `( expr )`. The parentheses leave no node in the tree.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let open_index = self.cursor.position();
        let open_span = self.cursor.current_span();
        self.cursor.advance();

        let inner = self.parse_expr()?;

        if self.cursor.eat_operator(Operator::RightParen) {
            return Ok(inner);
        }
        if self.cursor.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedParen { open_index },
                self.cursor.position(),
                open_span,
            ));
        }
        Err(self.unexpected_token("`)`"))
    }

    // Operator matching

    fn match_comparison_op(&self) -> Option<BinaryOp> {
        self.cursor
            .current_operator()
            .and_then(Operator::binary_op)
            .filter(|op| op.is_comparison())
    }

    fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_operator() {
            Some(Operator::Add) => Some(BinaryOp::Add),
            Some(Operator::Subtract) => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.cursor.current_operator() {
            Some(Operator::Multiply) => Some(BinaryOp::Mul),
            Some(Operator::Divide) => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn match_sign(&self) -> Option<Sign> {
        self.cursor.current_operator().and_then(Operator::sign)
    }

    // Error construction

    /// Error for the current token, which cannot appear here.
    ///
    /// Falls back to an end-of-input error when there is no current token.
    #[cold]
    pub(crate) fn unexpected_token(&self, expected: &'static str) -> ParseError {
        match self.cursor.current() {
            Some(token) => ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    found: token.kind,
                    expected,
                },
                self.cursor.position(),
                token.span,
            ),
            None => self.unexpected_eof(expected),
        }
    }

    #[cold]
    fn unexpected_eof(&self, expected: &'static str) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnexpectedEof { expected },
            self.cursor.position(),
            self.cursor.end_span(),
        )
    }
}
