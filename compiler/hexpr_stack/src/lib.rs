//! Stack growth for the recursive parser and evaluator.
//!
//! Both the precedence ladder and the tree walker recurse once per nesting
//! level of the input, so `((((1))))` or `----1` a few hundred thousand
//! levels deep would exhaust a thread stack. Each recursive entry point is
//! wrapped in [`ensure_sufficient_stack`], which switches to a fresh heap
//! segment when the remaining stack drops below the red zone.
//!
//! On `wasm32` the wrapper is a plain call.

/// Grow when less than this much stack remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
///
/// ```text
/// fn parse_unary(&mut self) -> Result<Expr, ExprError> {
///     ensure_sufficient_stack(|| {
///         // ... may call parse_unary again ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
