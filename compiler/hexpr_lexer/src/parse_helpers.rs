//! Numeric decoding with 32-bit wraparound.

use hexpr_ir::{UnsignedValue, Value};

/// Accumulate `digits` in `radix`, wrapping silently at 32 bits.
///
/// Returns `None` if any byte is not a digit of `radix` or `digits` is empty.
#[inline]
pub(crate) fn parse_int_wrapping(digits: &str, radix: u32) -> Option<Value> {
    if digits.is_empty() {
        return None;
    }
    let mut result: UnsignedValue = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        result = result.wrapping_mul(radix).wrapping_add(digit);
    }
    Some(result.cast_signed())
}
