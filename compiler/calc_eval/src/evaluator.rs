//! Tree-walking evaluator.

use calc_ir::Expr;
use calc_stack::ensure_sufficient_stack;

use crate::errors::{unbound_variable, EvalResult};
use crate::functions::apply_function;
use crate::operators::{evaluate_binary, evaluate_unary};
use crate::Bindings;

/// Evaluates expression trees against one set of bindings.
///
/// Holds only a shared borrow of the bindings, so evaluation cannot mutate
/// anything: the same tree and bindings always produce the same result.
pub struct Evaluator<'b> {
    bindings: &'b Bindings,
}

impl<'b> Evaluator<'b> {
    /// Create an evaluator over `bindings`.
    pub fn new(bindings: &'b Bindings) -> Self {
        Evaluator { bindings }
    }

    /// Evaluate `expr`.
    ///
    /// Operands are evaluated left to right, so when both sides of an
    /// operator fail, the left error is reported.
    pub fn eval(&self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Constant(constant) => Ok(constant.value()),
            Expr::Variable(name) => self
                .bindings
                .get(name)
                .ok_or_else(|| unbound_variable(name)),
            Expr::Unary { sign, operand } => Ok(evaluate_unary(*sign, self.eval(operand)?)),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(*op, left, right)
            }
            Expr::Call { function, argument } => apply_function(*function, self.eval(argument)?),
        }
    }
}
