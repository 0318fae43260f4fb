//! Expression tree.
//!
//! The parser produces an [`Expr`]; the evaluator reduces it to a number.
//! Every non-leaf node owns its children through a `Box`, so a tree has no
//! sharing and no cycles, and dropping the root frees the whole expression.
//!
//! Trees can be as deep as their source is long (`------1`). Drop frees
//! nodes from a worklist instead of recursing, and the recursive walks below
//! run under `ensure_sufficient_stack`.
//!
//! # Rendering
//!
//! `Display` renders a fully parenthesised form (`(2 + (3 * 4))`). The output
//! lexes and parses back to a structurally equal tree, which makes it
//! suitable for echoing "what was understood" back to a user.

use std::fmt;

use calc_stack::ensure_sufficient_stack;

use crate::{Constant, Function};

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Pow,

    // Comparison
    Eq,
    Lt,
    Gt,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }

    /// Check if this is a comparison (result is `1.0` or `0.0`).
    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Eq | Self::Lt | Self::Gt)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Prefix sign.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the source-level symbol for this sign.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

/// Expression node.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Reference to a caller-bound variable.
    Variable(String),
    /// Named constant (`e`, `pi`, `inf`).
    Constant(Constant),
    /// Prefix sign: `-x`, `+x`.
    Unary { sign: Sign, operand: Box<Expr> },
    /// Infix operation: `left op right`.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Function application: `sin x`, `ln(x + 1)`.
    Call {
        function: Function,
        argument: Box<Expr>,
    },
}

impl Expr {
    #[inline]
    pub fn number(value: f64) -> Self {
        Expr::Number(value)
    }

    #[inline]
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    #[inline]
    pub fn unary(sign: Sign, operand: Expr) -> Self {
        Expr::Unary {
            sign,
            operand: Box::new(operand),
        }
    }

    #[inline]
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn call(function: Function, argument: Expr) -> Self {
        Expr::Call {
            function,
            argument: Box::new(argument),
        }
    }

    /// Distinct variable names referenced by this tree, in order of first
    /// occurrence (left to right).
    pub fn variables(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut Vec<&'a str>) {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(name) => {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            Expr::Number(_) | Expr::Constant(_) => {}
            Expr::Unary { operand, .. } => operand.collect_variables(names),
            Expr::Binary { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
            Expr::Call { argument, .. } => argument.collect_variables(names),
        });
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        ensure_sufficient_stack(|| match self {
            Expr::Number(_) | Expr::Variable(_) | Expr::Constant(_) => 1,
            Expr::Unary { operand, .. } => 1 + operand.node_count(),
            Expr::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
            Expr::Call { argument, .. } => 1 + argument.node_count(),
        })
    }

    fn is_leaf(&self) -> bool {
        matches!(
            self,
            Expr::Number(_) | Expr::Variable(_) | Expr::Constant(_)
        )
    }

    /// Move every non-leaf child into `pending`, leaving a leaf in its place.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        match self {
            Expr::Number(_) | Expr::Variable(_) | Expr::Constant(_) => {}
            Expr::Unary { operand: child, .. } | Expr::Call { argument: child, .. } => {
                detach(child, pending);
            }
            Expr::Binary { left, right, .. } => {
                detach(left, pending);
                detach(right, pending);
            }
        }
    }
}

fn detach(child: &mut Expr, pending: &mut Vec<Expr>) {
    if !child.is_leaf() {
        pending.push(std::mem::replace(child, Expr::Number(0.0)));
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        // Each popped node has only leaf children left once detached, so its
        // own drop is shallow.
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Number(value) => Expr::Number(*value),
            Expr::Variable(name) => Expr::Variable(name.clone()),
            Expr::Constant(constant) => Expr::Constant(*constant),
            Expr::Unary { sign, operand } => Expr::unary(*sign, operand.as_ref().clone()),
            Expr::Binary { op, left, right } => {
                Expr::binary(*op, left.as_ref().clone(), right.as_ref().clone())
            }
            Expr::Call { function, argument } => {
                Expr::call(*function, argument.as_ref().clone())
            }
        })
    }
}

impl PartialEq for Expr {
    #[allow(clippy::float_cmp, reason = "structural equality compares literals exactly")]
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Number(a), Expr::Number(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (Expr::Constant(a), Expr::Constant(b)) => a == b,
            (
                Expr::Unary { sign, operand },
                Expr::Unary {
                    sign: other_sign,
                    operand: other_operand,
                },
            ) => sign == other_sign && operand == other_operand,
            (
                Expr::Binary { op, left, right },
                Expr::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left == other_left && right == other_right,
            (
                Expr::Call { function, argument },
                Expr::Call {
                    function: other_function,
                    argument: other_argument,
                },
            ) => function == other_function && argument == other_argument,
            _ => false,
        })
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Variable(name) => f.write_str(name),
            Expr::Constant(c) => write!(f, "{c}"),
            Expr::Unary { sign, operand } => write!(f, "({}{operand})", sign.as_symbol()),
            Expr::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Expr::Call { function, argument } => match argument.as_ref() {
                // Binary/unary arguments already carry their own parentheses.
                Expr::Binary { .. } | Expr::Unary { .. } => write!(f, "{function}{argument}"),
                _ => write!(f, "{function}({argument})"),
            },
        })
    }
}
