#![deny(clippy::arithmetic_side_effects)]
//! hexpr Eval - tree-walking evaluator for parsed expressions.
//!
//! # Architecture
//!
//! - `Evaluator`: the host's program counter and memory, consulted only
//!   while a tree is being evaluated
//! - `Interpreter`: walks an `Expr` against one `Evaluator`
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator
//!   dispatch on 32-bit values
//!
//! All arithmetic wraps at 32 bits. The only evaluation-time error a
//! well-formed tree can produce is division by zero; an out-of-bounds read
//! of a memory-backed variable is reported as an internal error.

mod interpreter;
mod operators;
mod unary_operators;

pub use interpreter::Interpreter;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

use hexpr_diagnostic::ExprError;
use hexpr_ir::{Expr, Value};

/// Evaluation context supplied by the host.
///
/// Memory reads take the computed address as a plain `Value`; what an
/// address means (and what a read past the end returns) is up to the host.
/// Every method defaults to zero.
pub trait Evaluator {
    /// Program counter, fixed for the duration of one evaluation.
    fn pc(&self) -> Value {
        0
    }

    fn mem_byte(&self, address: Value) -> u8 {
        let _ = address;
        0
    }

    fn mem_word(&self, address: Value) -> u16 {
        let _ = address;
        0
    }

    fn mem_dword(&self, address: Value) -> u32 {
        let _ = address;
        0
    }
}

/// Context with a zero program counter and all-zero memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoContext;

impl Evaluator for NoContext {}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    fn pc(&self) -> Value {
        (**self).pc()
    }

    fn mem_byte(&self, address: Value) -> u8 {
        (**self).mem_byte(address)
    }

    fn mem_word(&self, address: Value) -> u16 {
        (**self).mem_word(address)
    }

    fn mem_dword(&self, address: Value) -> u32 {
        (**self).mem_dword(address)
    }
}

/// Evaluate `expr` against `context`.
///
/// # Errors
///
/// Returns `division by zero.` when a `/` or `%` divisor evaluates to 0,
/// and `internal error.` when a host binding misbehaves at run time.
pub fn evaluate(expr: &Expr, context: &dyn Evaluator) -> Result<Value, ExprError> {
    let result = Interpreter::new(context).eval(expr);
    if let Err(err) = &result {
        tracing::debug!(error = %err, span = ?err.span, "evaluation failed");
    }
    result
}
