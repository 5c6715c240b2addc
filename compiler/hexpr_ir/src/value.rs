//! The integer domain shared by every stage.

/// Result type of every expression: a 32-bit signed integer.
///
/// All arithmetic wraps at 32 bits; there is no overflow error.
pub type Value = i32;

/// Unsigned view of [`Value`], used for logical right shifts and for
/// widening host reads.
pub type UnsignedValue = u32;

/// Highest arity a host function may have.
pub const MAX_FUNC_ARGS: usize = 3;

/// Longest identifier accepted by the lexer, in bytes, including the
/// optional trailing apostrophe.
pub const MAX_IDENT_LEN: usize = 128;
