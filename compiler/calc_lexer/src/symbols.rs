//! Symbol table for operators, functions and constants.
//!
//! Symbols are 1 to 3 characters long. The lexer tries the longest window
//! first, so the lookup is bucketed by window length: a 3-character window
//! can only be `sin`/`cos`/`tan`/`log`/`inf`, a 2-character window only
//! `ln`/`pi`, and a single character is either an operator or `e`.

use calc_ir::{Constant, Function, Operator, TokenKind};

/// Longest symbol in the table, in characters.
pub const MAX_SYMBOL_LEN: usize = 3;

/// Every entry of the symbol table, as `(symbol, kind)`.
pub const SYMBOLS: [(&str, TokenKind); 18] = [
    ("+", TokenKind::Operator(Operator::Add)),
    ("-", TokenKind::Operator(Operator::Subtract)),
    ("*", TokenKind::Operator(Operator::Multiply)),
    ("/", TokenKind::Operator(Operator::Divide)),
    ("(", TokenKind::Operator(Operator::LeftParen)),
    (")", TokenKind::Operator(Operator::RightParen)),
    ("^", TokenKind::Operator(Operator::Power)),
    ("=", TokenKind::Operator(Operator::Equals)),
    ("<", TokenKind::Operator(Operator::LessThan)),
    (">", TokenKind::Operator(Operator::MoreThan)),
    ("sin", TokenKind::Function(Function::Sin)),
    ("cos", TokenKind::Function(Function::Cos)),
    ("tan", TokenKind::Function(Function::Tan)),
    ("log", TokenKind::Function(Function::Log)),
    ("ln", TokenKind::Function(Function::Ln)),
    ("e", TokenKind::Constant(Constant::E)),
    ("pi", TokenKind::Constant(Constant::Pi)),
    ("inf", TokenKind::Constant(Constant::Inf)),
];

/// Look up a window of characters in the symbol table.
///
/// The window must match a symbol exactly; prefixes do not match.
#[inline]
pub fn lookup(window: &[char]) -> Option<TokenKind> {
    match window {
        ['s', 'i', 'n'] => Some(TokenKind::Function(Function::Sin)),
        ['c', 'o', 's'] => Some(TokenKind::Function(Function::Cos)),
        ['t', 'a', 'n'] => Some(TokenKind::Function(Function::Tan)),
        ['l', 'o', 'g'] => Some(TokenKind::Function(Function::Log)),
        ['i', 'n', 'f'] => Some(TokenKind::Constant(Constant::Inf)),
        ['l', 'n'] => Some(TokenKind::Function(Function::Ln)),
        ['p', 'i'] => Some(TokenKind::Constant(Constant::Pi)),
        ['e'] => Some(TokenKind::Constant(Constant::E)),
        [c] => lookup_operator(*c).map(TokenKind::Operator),
        _ => None,
    }
}

fn lookup_operator(c: char) -> Option<Operator> {
    match c {
        '+' => Some(Operator::Add),
        '-' => Some(Operator::Subtract),
        '*' => Some(Operator::Multiply),
        '/' => Some(Operator::Divide),
        '(' => Some(Operator::LeftParen),
        ')' => Some(Operator::RightParen),
        '^' => Some(Operator::Power),
        '=' => Some(Operator::Equals),
        '<' => Some(Operator::LessThan),
        '>' => Some(Operator::MoreThan),
        _ => None,
    }
}
