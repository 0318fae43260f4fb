//! Calc Eval - evaluator for calc expression trees.
//!
//! Reduces a parsed [`Expr`] to an `f64` given caller-supplied
//! [`Bindings`]. Evaluation is pure: no I/O, no mutation, and the same
//! tree with the same bindings always yields a bit-identical result.
//!
//! # Architecture
//!
//! - `Evaluator`: recursive walk over the tree
//! - `evaluate_binary` / `evaluate_unary`: direct enum dispatch for operators
//! - `apply_function`: built-in functions with their domain checks
//! - `errors`: the `EvalError` taxonomy and its constructors

mod bindings;
pub mod errors;
mod evaluator;
mod functions;
mod operators;

pub use bindings::Bindings;
pub use errors::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use functions::apply_function;
pub use operators::{evaluate_binary, evaluate_unary};

use calc_ir::Expr;
use rayon::prelude::*;
use tracing::debug;

/// Evaluate `expr` against `bindings`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn evaluate(expr: &Expr, bindings: &Bindings) -> EvalResult {
    Evaluator::new(bindings)
        .eval(expr)
        .inspect_err(|err| debug!(%err, "evaluation failed"))
}

/// Evaluate one tree against many independent binding tables in parallel.
///
/// Results are in the same order as `bindings`, and each is identical to
/// what [`evaluate`] returns for that table.
pub fn evaluate_batch(expr: &Expr, bindings: &[Bindings]) -> Vec<EvalResult> {
    bindings
        .par_iter()
        .map(|table| evaluate(expr, table))
        .collect()
}

#[cfg(test)]
mod tests;
