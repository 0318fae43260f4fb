//! Parser tests over lexed source text.

#![allow(clippy::unwrap_used)]

mod parser;

use calc_ir::Expr;

use crate::{parse, ParseError};

fn parse_source(source: &str) -> Result<Expr, ParseError> {
    let tokens = calc_lexer::tokenize(source).unwrap();
    parse(&tokens)
}
