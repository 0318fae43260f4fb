//! Evaluation errors.
//!
//! An `EvalError` is fatal to one evaluation only. The tree is untouched, so
//! the caller can fix the bindings and evaluate again.

use calc_ir::Function;
use thiserror::Error;

/// Result of evaluating an expression.
pub type EvalResult = Result<f64, EvalError>;

/// Why an evaluation failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// The tree references a variable the bindings do not define.
    #[error("unbound variable `{name}`")]
    UnboundVariable { name: String },
    /// Right operand of `/` evaluated to zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A function was applied outside its domain (`log(0)`, `ln(-1)`).
    #[error("{function} is undefined for {input}")]
    DomainError { function: Function, input: f64 },
}

#[cold]
pub fn unbound_variable(name: &str) -> EvalError {
    EvalError::UnboundVariable {
        name: name.to_owned(),
    }
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero
}

#[cold]
pub fn domain_error(function: Function, input: f64) -> EvalError {
    EvalError::DomainError { function, input }
}
