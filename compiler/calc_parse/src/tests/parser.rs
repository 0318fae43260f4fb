//! Tree shape for well-formed input: precedence, associativity, signs,
//! function arguments and grouping.

use calc_ir::{BinaryOp, Constant, Expr, Function, Sign};
use pretty_assertions::assert_eq;

use super::parse_source;

fn num(n: f64) -> Expr {
    Expr::number(n)
}

fn var(name: &str) -> Expr {
    Expr::variable(name)
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::binary(op, left, right)
}

fn neg(operand: Expr) -> Expr {
    Expr::unary(Sign::Negative, operand)
}

fn parsed(source: &str) -> Expr {
    parse_source(source).unwrap()
}

// === Leaves ===

#[test]
fn parse_leaves() {
    assert_eq!(parsed("42"), num(42.0));
    assert_eq!(parsed("x"), var("x"));
    assert_eq!(parsed("pi"), Expr::Constant(Constant::Pi));
    assert_eq!(parsed("inf"), Expr::Constant(Constant::Inf));
}

// === Precedence ===

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parsed("2 + 3 * 4"),
        bin(BinaryOp::Add, num(2.0), bin(BinaryOp::Mul, num(3.0), num(4.0)))
    );
}

#[test]
fn power_binds_tighter_than_multiplication() {
    assert_eq!(
        parsed("2 * 3 ^ 2"),
        bin(BinaryOp::Mul, num(2.0), bin(BinaryOp::Pow, num(3.0), num(2.0)))
    );
}

#[test]
fn comparison_is_lowest() {
    assert_eq!(
        parsed("x + 1 < 2 * y"),
        bin(
            BinaryOp::Lt,
            bin(BinaryOp::Add, var("x"), num(1.0)),
            bin(BinaryOp::Mul, num(2.0), var("y"))
        )
    );
}

// === Associativity ===

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(
        parsed("8 - 3 - 2"),
        bin(BinaryOp::Sub, bin(BinaryOp::Sub, num(8.0), num(3.0)), num(2.0))
    );
}

#[test]
fn division_is_left_associative() {
    assert_eq!(
        parsed("8 / 4 / 2"),
        bin(BinaryOp::Div, bin(BinaryOp::Div, num(8.0), num(4.0)), num(2.0))
    );
}

#[test]
fn power_is_right_associative() {
    assert_eq!(
        parsed("2 ^ 3 ^ 2"),
        bin(BinaryOp::Pow, num(2.0), bin(BinaryOp::Pow, num(3.0), num(2.0)))
    );
}

// === Signs ===

#[test]
fn leading_minus_is_unary() {
    assert_eq!(
        parsed("-2 + 3"),
        bin(BinaryOp::Add, neg(num(2.0)), num(3.0))
    );
}

#[test]
fn minus_after_operator_is_unary() {
    assert_eq!(
        parsed("2 - -3"),
        bin(BinaryOp::Sub, num(2.0), neg(num(3.0)))
    );
}

#[test]
fn leading_plus_is_unary() {
    assert_eq!(
        parsed("+x"),
        Expr::unary(Sign::Positive, var("x"))
    );
}

#[test]
fn signs_repeat() {
    assert_eq!(parsed("--2"), neg(neg(num(2.0))));
}

#[test]
fn sign_binds_looser_than_power() {
    assert_eq!(
        parsed("-2 ^ 2"),
        neg(bin(BinaryOp::Pow, num(2.0), num(2.0)))
    );
}

#[test]
fn negative_exponent() {
    assert_eq!(
        parsed("2 ^ -1"),
        bin(BinaryOp::Pow, num(2.0), neg(num(1.0)))
    );
}

// === Functions ===

#[test]
fn function_with_parenthesized_argument() {
    assert_eq!(
        parsed("sin(1/2)"),
        Expr::call(Function::Sin, bin(BinaryOp::Div, num(1.0), num(2.0)))
    );
}

#[test]
fn function_with_bare_primary_argument() {
    assert_eq!(parsed("ln x"), Expr::call(Function::Ln, var("x")));
    assert_eq!(parsed("sinx"), Expr::call(Function::Sin, var("x")));
}

#[test]
fn function_argument_is_a_single_primary() {
    assert_eq!(
        parsed("sin x ^ 2"),
        bin(BinaryOp::Pow, Expr::call(Function::Sin, var("x")), num(2.0))
    );
    assert_eq!(
        parsed("cos 2 * 3"),
        bin(BinaryOp::Mul, Expr::call(Function::Cos, num(2.0)), num(3.0))
    );
}

#[test]
fn nested_function_calls() {
    assert_eq!(
        parsed("log ln e"),
        Expr::call(
            Function::Log,
            Expr::call(Function::Ln, Expr::Constant(Constant::E))
        )
    );
}

#[test]
fn reference_expression_tree() {
    assert_eq!(
        parsed("2 + sin(1/2) * 44.0"),
        bin(
            BinaryOp::Add,
            num(2.0),
            bin(
                BinaryOp::Mul,
                Expr::call(Function::Sin, bin(BinaryOp::Div, num(1.0), num(2.0))),
                num(44.0)
            )
        )
    );
}

// === Grouping ===

#[test]
fn parentheses_override_precedence() {
    assert_eq!(
        parsed("(2 + 3) * 4"),
        bin(BinaryOp::Mul, bin(BinaryOp::Add, num(2.0), num(3.0)), num(4.0))
    );
}

#[test]
fn parentheses_leave_no_node() {
    assert_eq!(parsed("((x))"), var("x"));
}

#[test]
fn deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parsed(&source), num(1.0));
}

#[test]
fn long_sign_chain() {
    let source = format!("{}1", "-".repeat(2_000));
    assert_eq!(parsed(&source).node_count(), 2_001);
}
