//! Stack growth for deeply nested expressions.
//!
//! Lispy's parser, reader and evaluator are all plain recursive descents over
//! the expression tree. A source line such as `((((((... 1 ...))))))` nests
//! one native frame per level, so every recursive entry point wraps itself in
//! [`ensure_sufficient_stack`].
//!
//! Native targets grow the stack through `stacker`. On `wasm32` the guard is
//! a passthrough.

/// Grow the stack once less than this much remains (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1 MiB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
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

#[cfg(test)]
mod tests;
