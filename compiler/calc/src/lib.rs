//! Calc - parse and evaluate arithmetic expressions.
//!
//! The pipeline is text → tokens → tree → number:
//!
//! ```text
//! let tree = calc::parse("2 + sin(x) * 4")?;
//! let value = calc::evaluate(&tree, &calc::Bindings::new().with("x", 0.5))?;
//! ```
//!
//! A tree is an immutable value: parse once, evaluate as often as needed
//! with different bindings.
//!
//! # Crates
//!
//! - `calc_ir`: tokens and the expression tree
//! - `calc_lexer_core`: the character reader
//! - `calc_lexer`: text to tokens
//! - `calc_parse`: tokens to tree
//! - `calc_eval`: tree to number

mod error;
mod tracing_setup;

pub use error::Error;
pub use tracing_setup::init_tracing;

pub use calc_eval::{evaluate, evaluate_batch, Bindings, EvalError, EvalResult};
pub use calc_ir::{BinaryOp, Constant, Expr, Function, Operator, Sign, Span, Token, TokenKind};
pub use calc_lexer::{tokenize, LexError, LexErrorKind};
pub use calc_parse::{ParseError, ParseErrorKind};

use tracing::debug;

/// Lex and parse `text` into an expression tree.
pub fn parse(text: &str) -> Result<Expr, Error> {
    let tokens = tokenize(text)?;
    let tree = calc_parse::parse(&tokens)?;
    debug!(nodes = tree.node_count(), "parsed");
    Ok(tree)
}

/// Parse and evaluate `text` in one step.
pub fn eval_str(text: &str, bindings: &Bindings) -> Result<f64, Error> {
    let tree = parse(text)?;
    Ok(evaluate(&tree, bindings)?)
}
