//! Calc IR - shared data types for the expression pipeline.
//!
//! This crate contains the types every phase agrees on:
//! - Spans for source locations (character offsets)
//! - Tokens and the closed `TokenKind` union produced by the lexer
//! - The expression tree (`Expr`) produced by the parser and walked
//!   by the evaluator
//!
//! # Design Philosophy
//!
//! - **One closed union per concept**: operators, functions and constants
//!   are separate enums, but a token is exactly one `TokenKind` variant, so
//!   every consumer matches exhaustively.
//! - **Owned trees**: `Expr` children are boxed and exclusively owned. A
//!   parsed tree is an immutable value that can be evaluated any number of
//!   times.

mod ast;
mod span;
mod token;

pub use ast::{BinaryOp, Expr, Sign};
pub use span::Span;
pub use token::{Constant, Function, Operator, Token, TokenKind};
