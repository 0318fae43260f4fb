//! Stack growth for deeply nested expressions.
//!
//! The parser and evaluator recurse once per nesting level, so an input
//! like `((((...1...))))` or `------1` recurses as deep as it is long.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] grows the
//! stack on demand instead of overflowing it.
//!
//! On `wasm32` the guard is a plain call.

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if fewer than `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly; wasm manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
