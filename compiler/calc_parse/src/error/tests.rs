use calc_ir::{BinaryOp, Operator, Span, TokenKind};

use super::*;

#[test]
fn unexpected_token_message() {
    let err = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Operator(Operator::RightParen),
            expected: "an operand",
        },
        2,
        Span::new(4, 5),
    );
    assert_eq!(err.message(), "expected an operand, found `)`");
    assert_eq!(err.to_string(), "expected an operand, found `)` (token 2)");
}

#[test]
fn eof_and_paren_messages() {
    let eof = ParseErrorKind::UnexpectedEof {
        expected: "an operand",
    };
    assert_eq!(eof.to_string(), "expected an operand, found end of input");

    let unclosed = ParseErrorKind::UnclosedParen { open_index: 0 };
    assert_eq!(unclosed.to_string(), "unclosed `(` at token 0");
}

#[test]
fn chained_comparison_names_operator() {
    let kind = ParseErrorKind::ChainedComparison { op: BinaryOp::Lt };
    assert_eq!(
        kind.to_string(),
        "comparison operators cannot be chained (second `<`)"
    );
}
