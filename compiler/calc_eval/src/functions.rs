//! Built-in function implementations.

use calc_ir::Function;

use crate::errors::{domain_error, EvalResult};

/// Apply a built-in function to its evaluated argument.
///
/// Trigonometric functions take radians and are applied directly, so
/// `sin(inf)` is NaN rather than an error. Both logarithms require a finite,
/// strictly positive argument.
pub fn apply_function(function: Function, argument: f64) -> EvalResult {
    match function {
        Function::Sin => Ok(argument.sin()),
        Function::Cos => Ok(argument.cos()),
        Function::Tan => Ok(argument.tan()),
        Function::Log => logarithm(function, argument).map(f64::log10),
        Function::Ln => logarithm(function, argument).map(f64::ln),
    }
}

/// Check the logarithm domain: finite and strictly positive. NaN fails.
fn logarithm(function: Function, argument: f64) -> EvalResult {
    if argument.is_finite() && argument > 0.0 {
        Ok(argument)
    } else {
        Err(domain_error(function, argument))
    }
}
