//! Unary operator implementations for the evaluator.

use hexpr_ir::{UnaryOp, Value};

/// Evaluate a unary operation. Cannot fail: negation wraps, so
/// `-Value::MIN` is `Value::MIN`.
pub fn evaluate_unary(value: Value, op: UnaryOp) -> Value {
    match op {
        UnaryOp::Neg => value.wrapping_neg(),
        UnaryOp::Not => Value::from(value == 0),
        UnaryOp::BitNot => !value,
    }
}
