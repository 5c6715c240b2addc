//! Raw scanner for the expression language.
//!
//! Splits input into `(RawTag, len)` pairs without allocating, decoding
//! numbers or judging identifiers. Malformed input is encoded as error
//! tags rather than `Err` values; the cooking layer in `hexpr_lexer`
//! turns tags into tokens and errors.
//!
//! ```text
//! SourceBuffer ──cursor()──> Cursor ──> RawScanner ──next_token()──> RawToken
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};

/// Scan `source` to completion, returning every token including the final `Eof`.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        tokens.push(token);
        if token.tag == RawTag::Eof {
            return tokens;
        }
    }
}
