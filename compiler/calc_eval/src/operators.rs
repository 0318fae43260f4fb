//! Operator implementations for the evaluator.
//!
//! Direct enum-based dispatch: the operator set is closed, so exhaustive
//! matching catches a missing case at compile time.

use calc_ir::{BinaryOp, Sign};

use crate::errors::{division_by_zero, EvalResult};

/// Apply a binary operator to two evaluated operands.
///
/// # Semantics
///
/// - `/` fails when `right` is exactly zero (either sign).
/// - `^` is `f64::powf`; a negative base with a fractional exponent yields NaN.
/// - `=`, `<`, `>` produce `1.0` for true and `0.0` for false. `=` is exact
///   floating-point equality, so `0.1 + 0.2 = 0.3` is false and NaN compares
///   unequal to itself. Callers that want a tolerance apply it themselves.
#[allow(clippy::float_cmp, reason = "`=` is exact equality")]
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(left + right),
        BinaryOp::Sub => Ok(left - right),
        BinaryOp::Mul => Ok(left * right),
        BinaryOp::Div => {
            if right == 0.0 {
                Err(division_by_zero())
            } else {
                Ok(left / right)
            }
        }
        BinaryOp::Pow => Ok(left.powf(right)),
        BinaryOp::Eq => Ok(truth(left == right)),
        BinaryOp::Lt => Ok(truth(left < right)),
        BinaryOp::Gt => Ok(truth(left > right)),
    }
}

/// Apply a prefix sign.
#[inline]
pub fn evaluate_unary(sign: Sign, operand: f64) -> f64 {
    match sign {
        Sign::Positive => operand,
        Sign::Negative => -operand,
    }
}

#[inline]
fn truth(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
