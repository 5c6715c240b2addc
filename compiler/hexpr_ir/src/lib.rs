//! hexpr IR - shared data model for the expression compiler.
//!
//! This crate contains the types every pipeline stage agrees on:
//! - `Value` / `UnsignedValue`: the 32-bit integer domain
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The owned syntax tree (`Expr`, `ExprKind`)
//! - Host bindings: `HostFunction`, `ValuePtr`, `HostMemory`
//!
//! # Design Philosophy
//!
//! - **Own everything**: each node owns its children through `Box`; a tree
//!   has no sharing and no cycles.
//! - **Immutable after parse**: nothing in `Expr` is mutated by evaluation,
//!   so a tree is `Send + Sync` and can be evaluated from many threads.
//! - **Resolve once**: identifiers are bound to host callbacks or memory at
//!   parse time; evaluation never looks a name up again.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod expr;
mod host;
mod span;
mod token;
mod value;

pub use expr::{BinaryOp, DirectRead, DirectWidth, Expr, ExprKind, MemWidth, UnaryOp};
pub use host::{
    BinaryFn, HostFunction, HostMemory, MemoryRef, NullaryFn, TernaryFn, UnaryFn, ValueFn,
    ValuePtr,
};
pub use span::Span;
pub use token::{Token, TokenKind, TokenList};
pub use value::{UnsignedValue, Value, MAX_FUNC_ARGS, MAX_IDENT_LEN};
