//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the closed operator set. Every operation
//! wraps at 32 bits; the only failure is a zero divisor.

use hexpr_diagnostic::ExprErrorKind;
use hexpr_ir::{BinaryOp, Value};

/// Division with zero guard. `Value::MIN / -1` wraps.
#[inline]
fn checked_div(
    a: Value,
    b: Value,
    op: fn(Value, Value) -> Value,
) -> Result<Value, ExprErrorKind> {
    if b == 0 {
        Err(ExprErrorKind::DivisionByZero)
    } else {
        Ok(op(a, b))
    }
}

#[inline]
fn truth(b: bool) -> Value {
    Value::from(b)
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// `&&` and `||` are handled here for completeness; the interpreter
/// short-circuits them before both operands exist. Shift counts use only
/// their low 5 bits, and `>>` shifts the unsigned view of `left`.
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, ExprErrorKind> {
    let (a, b) = (left, right);
    match op {
        BinaryOp::Or => Ok(truth(a != 0 || b != 0)),
        BinaryOp::And => Ok(truth(a != 0 && b != 0)),
        BinaryOp::BitOr => Ok(a | b),
        BinaryOp::BitXor => Ok(a ^ b),
        BinaryOp::BitAnd => Ok(a & b),
        BinaryOp::Eq => Ok(truth(a == b)),
        BinaryOp::NotEq => Ok(truth(a != b)),
        BinaryOp::Lt => Ok(truth(a < b)),
        BinaryOp::LtEq => Ok(truth(a <= b)),
        BinaryOp::Gt => Ok(truth(a > b)),
        BinaryOp::GtEq => Ok(truth(a >= b)),
        BinaryOp::Shl => Ok(a.wrapping_shl(b.cast_unsigned())),
        BinaryOp::Shr => Ok(a
            .cast_unsigned()
            .wrapping_shr(b.cast_unsigned())
            .cast_signed()),
        BinaryOp::Add => Ok(a.wrapping_add(b)),
        BinaryOp::Sub => Ok(a.wrapping_sub(b)),
        BinaryOp::Mul => Ok(a.wrapping_mul(b)),
        BinaryOp::Div => checked_div(a, b, Value::wrapping_div),
        BinaryOp::Rem => checked_div(a, b, Value::wrapping_rem),
    }
}

#[cfg(test)]
mod tests;
