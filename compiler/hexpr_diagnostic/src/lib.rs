//! Error reporting for the expression compiler.
//!
//! Every stage fails with the same `ExprError`: a kind carrying the exact
//! user-facing message, plus the span of the offending input when one is
//! known. Hosts that only need text call `to_string()`; hosts that want
//! structure match on `kind`, `code()` or `category()`.

pub mod emitter;
mod error;
mod error_code;

pub use emitter::{ColorMode, TerminalEmitter};
pub use error::{ExprError, ExprErrorKind};
pub use error_code::{ErrorCategory, ErrorCode};
