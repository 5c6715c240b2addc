use super::*;
use pretty_assertions::assert_eq;

fn eval(a: Value, b: Value, op: BinaryOp) -> Value {
    evaluate_binary(a, b, op).unwrap_or_else(|err| panic!("{a} {op:?} {b}: {err}"))
}

#[test]
fn arithmetic_wraps() {
    assert_eq!(eval(Value::MAX, 1, BinaryOp::Add), Value::MIN);
    assert_eq!(eval(Value::MIN, 1, BinaryOp::Sub), Value::MAX);
    assert_eq!(eval(0x1_0000, 0x1_0000, BinaryOp::Mul), 0);
    assert_eq!(eval(Value::MIN, -1, BinaryOp::Div), Value::MIN);
    assert_eq!(eval(Value::MIN, -1, BinaryOp::Rem), 0);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval(7, 2, BinaryOp::Div), 3);
    assert_eq!(eval(-7, 2, BinaryOp::Div), -3);
    assert_eq!(eval(-7, 2, BinaryOp::Rem), -1);
    assert_eq!(eval(7, -2, BinaryOp::Rem), 1);
}

#[test]
fn zero_divisor_is_an_error() {
    assert_eq!(
        evaluate_binary(2, 0, BinaryOp::Div),
        Err(ExprErrorKind::DivisionByZero)
    );
    assert_eq!(
        evaluate_binary(3, 0, BinaryOp::Rem),
        Err(ExprErrorKind::DivisionByZero)
    );
}

#[test]
fn comparisons_yield_zero_or_one() {
    assert_eq!(eval(1, 2, BinaryOp::Lt), 1);
    assert_eq!(eval(2, 2, BinaryOp::LtEq), 1);
    assert_eq!(eval(-1, 0, BinaryOp::Gt), 0);
    assert_eq!(eval(0, -1, BinaryOp::GtEq), 1);
    assert_eq!(eval(5, 5, BinaryOp::Eq), 1);
    assert_eq!(eval(5, 5, BinaryOp::NotEq), 0);
}

#[test]
fn logical_ops_normalize_operands() {
    assert_eq!(eval(7, -3, BinaryOp::And), 1);
    assert_eq!(eval(7, 0, BinaryOp::And), 0);
    assert_eq!(eval(0, 0, BinaryOp::Or), 0);
    assert_eq!(eval(0, 42, BinaryOp::Or), 1);
}

#[test]
fn bitwise_ops() {
    assert_eq!(eval(0b1100, 0b1010, BinaryOp::BitAnd), 0b1000);
    assert_eq!(eval(0b1100, 0b1010, BinaryOp::BitOr), 0b1110);
    assert_eq!(eval(0b1100, 0b1010, BinaryOp::BitXor), 0b0110);
}

#[test]
fn right_shift_is_logical() {
    assert_eq!(eval(-1, 28, BinaryOp::Shr), 0xf);
    assert_eq!(eval(Value::MIN, 31, BinaryOp::Shr), 1);
    assert_eq!(eval(-1, 4, BinaryOp::Shl), -16);
}

#[test]
fn shift_count_is_masked_to_five_bits() {
    assert_eq!(eval(1, 32, BinaryOp::Shl), 1);
    assert_eq!(eval(1, 33, BinaryOp::Shl), 2);
    assert_eq!(eval(0x100, 36, BinaryOp::Shr), 0x10);
    // -1 & 31 == 31
    assert_eq!(eval(1, -1, BinaryOp::Shl), Value::MIN);
}
