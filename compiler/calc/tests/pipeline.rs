//! End-to-end tests through the public entry points.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use calc::{
    eval_str, evaluate, parse, BinaryOp, Bindings, Constant, Error, EvalError, Expr, Function,
    LexErrorKind, ParseErrorKind, Sign, Span,
};
use pretty_assertions::assert_eq;

fn eval(text: &str) -> f64 {
    eval_str(text, &Bindings::new()).unwrap()
}

#[test]
fn reference_expression() {
    assert_eq!(eval("2 + sin(1/2) * 44.0"), 2.0 + 0.5_f64.sin() * 44.0);
}

#[test]
fn parse_once_evaluate_many() {
    let tree = parse("x ^ 2 + 1").unwrap();
    let values: Vec<f64> = [0.0, 1.0, 3.0]
        .into_iter()
        .map(|x| evaluate(&tree, &Bindings::new().with("x", x)).unwrap())
        .collect();
    assert_eq!(values, vec![1.0, 2.0, 10.0]);
}

#[test]
fn precedence_and_associativity() {
    assert_eq!(eval("1 + 2 * 3"), 7.0);
    assert_eq!(eval("(1 + 2) * 3"), 9.0);
    assert_eq!(eval("10 - 4 - 3"), 3.0);
    assert_eq!(eval("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval("-2 ^ 2"), -4.0);
    assert_eq!(eval("2 ^ -1"), 0.5);
    assert_eq!(eval("1 + 2 < 4"), 1.0);
}

#[test]
fn function_argument_forms() {
    assert_eq!(eval("sin 0"), 0.0);
    assert_eq!(eval("cos(0)"), 1.0);
    assert!((eval("ln e") - 1.0).abs() < 1e-15);
    assert_eq!(eval("log 100"), 2.0);
}

#[test]
fn constants() {
    assert_eq!(eval("pi"), std::f64::consts::PI);
    assert_eq!(eval("e"), std::f64::consts::E);
    assert_eq!(eval("-inf"), f64::NEG_INFINITY);
}

#[test]
fn tree_shape() {
    let tree = parse("-x + sin(2)").unwrap();
    let expected = Expr::binary(
        BinaryOp::Add,
        Expr::unary(Sign::Negative, Expr::variable("x")),
        Expr::call(Function::Sin, Expr::number(2.0)),
    );
    assert_eq!(tree, expected);
    assert_eq!(tree.variables(), vec!["x"]);
}

#[test]
fn display_reparses_to_same_tree() {
    for text in ["1 + 2 * 3", "-(x - y) ^ 2", "sin x * cos(y + 1)", "ln(e) = 1", "pi < inf"] {
        let tree = parse(text).unwrap();
        assert_eq!(parse(&tree.to_string()).unwrap(), tree, "{text}");
    }
}

#[test]
fn constant_nodes_survive_parsing() {
    assert_eq!(parse("pi").unwrap(), Expr::Constant(Constant::Pi));
}

#[test]
fn lex_error_is_reported_with_offset() {
    let err = parse("1 + $").unwrap_err();
    let Error::Lex(lex) = &err else {
        panic!("expected lex error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::InvalidCharacter { ch: '$' });
    assert_eq!(err.span(), Some(Span::new(4, 5)));
}

#[test]
fn parse_error_is_reported() {
    let err = parse("(1 + 2").unwrap_err();
    let Error::Parse(parse_err) = &err else {
        panic!("expected parse error, got {err:?}");
    };
    assert_eq!(parse_err.kind, ParseErrorKind::UnclosedParen { open_index: 0 });
    assert!(err.span().is_some());
}

#[test]
fn empty_input_is_a_parse_error() {
    assert!(matches!(
        parse("   "),
        Err(Error::Parse(ref err)) if err.kind == ParseErrorKind::Empty
    ));
}

#[test]
fn eval_errors_pass_through() {
    let err = eval_str("1 / (2 - 2)", &Bindings::new()).unwrap_err();
    assert_eq!(err, Error::Eval(EvalError::DivisionByZero));
    assert_eq!(err.span(), None);

    let err = eval_str("y + 1", &Bindings::new()).unwrap_err();
    assert_eq!(
        err,
        Error::Eval(EvalError::UnboundVariable {
            name: "y".to_owned()
        })
    );
}

#[test]
fn error_messages_name_the_phase() {
    let err = eval_str("ln 0", &Bindings::new()).unwrap_err();
    assert!(err.to_string().starts_with("evaluation error: "), "{err}");
    let err = parse("1 +").unwrap_err();
    assert!(err.to_string().starts_with("parse error: "), "{err}");
}

#[test]
fn deep_sign_chain_parses_evaluates_and_drops() {
    let source = format!("{}1", "-".repeat(1_000_000));
    let tree = parse(&source).unwrap();
    assert_eq!(evaluate(&tree, &Bindings::new()).unwrap(), 1.0);
    assert_eq!(tree.node_count(), 1_000_001);
    drop(tree);
}

#[test]
fn deep_call_nesting_drops() {
    let depth = 100_000;
    let source = format!("{}1{}", "sin(".repeat(depth), ")".repeat(depth));
    let tree = parse(&source).unwrap();
    assert!(evaluate(&tree, &Bindings::new()).unwrap() > 0.0);
    drop(tree);
}

#[test]
fn overflowing_literal_is_rejected() {
    let err = parse(&"9".repeat(400)).unwrap_err();
    assert!(matches!(
        err,
        Error::Lex(ref lex) if matches!(lex.kind, LexErrorKind::InvalidNumber { .. })
    ));
}

#[test]
fn init_tracing_is_idempotent() {
    calc::init_tracing();
    calc::init_tracing();
    assert_eq!(eval("1 + 1"), 2.0);
}
