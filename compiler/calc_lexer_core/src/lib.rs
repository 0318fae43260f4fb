//! Low-level character reader for the calc lexer.
//!
//! This crate provides [`StringReader`], a bounds-checked cursor over the
//! characters of an input string. It knows nothing about tokens; the lexer
//! in `calc_lexer` drives it.
//!
//! # Offsets
//!
//! All positions are character offsets, not byte offsets. Multi-byte input
//! (`"π + 1"`) advances one position per `char`.

mod reader;

pub use reader::{ReaderError, StringReader};
