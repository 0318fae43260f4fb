//! Tokens produced by the lexer.
//!
//! A token pairs the exact source text it was scanned from (`lexeme`) with
//! its classification (`kind`) and location (`span`). The classification is
//! a single closed union: a number, a single-letter variable, or one of the
//! fixed symbol-table entries (operator, function, constant).

use std::fmt;

use crate::{BinaryOp, Sign, Span};

/// A lexical token.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Source text the token was scanned from.
    pub lexeme: String,
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, span: Span) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            span,
        }
    }
}

/// Token classification.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// Numeric literal (`2`, `44.0`, `3.`).
    Number(f64),
    /// Single-letter variable (`x`).
    Variable(char),
    Operator(Operator),
    Function(Function),
    Constant(Constant),
}

impl TokenKind {
    /// Returns the operator if this token is one.
    #[inline]
    pub fn as_operator(self) -> Option<Operator> {
        match self {
            TokenKind::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// Check if this token is the given operator.
    #[inline]
    pub fn is_operator(self, op: Operator) -> bool {
        self.as_operator() == Some(op)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "number `{n}`"),
            TokenKind::Variable(c) => write!(f, "variable `{c}`"),
            TokenKind::Operator(op) => write!(f, "`{op}`"),
            TokenKind::Function(func) => write!(f, "function `{func}`"),
            TokenKind::Constant(c) => write!(f, "constant `{c}`"),
        }
    }
}

/// Single-character operator symbols, parentheses included.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    LeftParen,
    RightParen,
    Equals,
    LessThan,
    MoreThan,
}

impl Operator {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::Equals => "=",
            Self::LessThan => "<",
            Self::MoreThan => ">",
        }
    }

    /// The binary operation this symbol denotes in infix position.
    ///
    /// Parentheses are grouping, not operations, and return `None`.
    pub const fn binary_op(self) -> Option<BinaryOp> {
        match self {
            Self::Add => Some(BinaryOp::Add),
            Self::Subtract => Some(BinaryOp::Sub),
            Self::Multiply => Some(BinaryOp::Mul),
            Self::Divide => Some(BinaryOp::Div),
            Self::Power => Some(BinaryOp::Pow),
            Self::Equals => Some(BinaryOp::Eq),
            Self::LessThan => Some(BinaryOp::Lt),
            Self::MoreThan => Some(BinaryOp::Gt),
            Self::LeftParen | Self::RightParen => None,
        }
    }

    /// The sign this symbol denotes in prefix position (`+` and `-` only).
    pub const fn sign(self) -> Option<Sign> {
        match self {
            Self::Add => Some(Sign::Positive),
            Self::Subtract => Some(Sign::Negative),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Named single-argument functions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Function {
    Sin,
    Cos,
    Tan,
    /// Base-10 logarithm.
    Log,
    /// Natural logarithm.
    Ln,
}

impl Function {
    /// Returns the source-level name of this function.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Named numeric constants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Constant {
    E,
    Pi,
    Inf,
}

impl Constant {
    /// Returns the source-level name of this constant.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::E => "e",
            Self::Pi => "pi",
            Self::Inf => "inf",
        }
    }

    /// The constant's fixed value.
    pub const fn value(self) -> f64 {
        match self {
            Self::E => std::f64::consts::E,
            Self::Pi => std::f64::consts::PI,
            Self::Inf => f64::INFINITY,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
