//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! The sentinel byte (`0x00`) dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner. Produces one token at a time.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the input is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\r' | b'\n' => self.whitespace(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'.' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'$' => self.hex_or_punct(start, RawTag::Dollar),
            b'#' => self.hex_or_punct(start, RawTag::Hash),
            b'@' => self.single(start, RawTag::At),
            b',' => self.single(start, RawTag::Comma),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b'?' => self.single(start, RawTag::Question),
            b':' => self.single(start, RawTag::Colon),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.single(start, RawTag::Minus),
            b'*' => self.single(start, RawTag::Star),
            b'/' => self.single(start, RawTag::Slash),
            b'%' => self.single(start, RawTag::Percent),
            b'^' => self.single(start, RawTag::Caret),
            b'~' => self.single(start, RawTag::Tilde),
            b'&' => self.pair(start, b'&', RawTag::AmpersandAmpersand, RawTag::Ampersand),
            b'|' => self.pair(start, b'|', RawTag::PipePipe, RawTag::Pipe),
            b'=' => self.pair(start, b'=', RawTag::EqualEqual, RawTag::Equal),
            b'!' => self.pair(start, b'=', RawTag::BangEqual, RawTag::Bang),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            _ => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            self.token(start, RawTag::Eof)
        } else {
            self.cursor.advance();
            self.token(start, RawTag::InteriorNull)
        }
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor
            .eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
        self.token(start, RawTag::Whitespace)
    }

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // first char already validated
        self.cursor.eat_while(is_ident_continue);
        if self.cursor.current() == b'\'' {
            self.cursor.advance();
        }
        self.token(start, RawTag::Ident)
    }

    // Numbers

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' => {
                    return self.prefixed(
                        start,
                        |b| b.is_ascii_hexdigit(),
                        RawTag::HexInt,
                        RawTag::InvalidHex,
                    );
                }
                b'b' | b'B' => {
                    return self.prefixed(
                        start,
                        |b| matches!(b, b'0' | b'1'),
                        RawTag::BinInt,
                        RawTag::InvalidBinary,
                    );
                }
                b'o' | b'O' => {
                    return self.prefixed(
                        start,
                        |b| matches!(b, b'0'..=b'7'),
                        RawTag::OctInt,
                        RawTag::InvalidOctal,
                    );
                }
                b'0'..=b'9' => {
                    self.cursor.eat_while(is_ident_continue);
                    return self.token(start, RawTag::LeadingZero);
                }
                _ => {}
            }
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        self.digits_end(start, RawTag::DecInt, RawTag::InvalidDecimal)
    }

    /// Literal with a two-byte prefix (`0x`, `0b`, `0o`). The cursor sits
    /// on the prefix letter.
    fn prefixed(
        &mut self,
        start: u32,
        is_digit: impl Fn(u8) -> bool,
        ok: RawTag,
        err: RawTag,
    ) -> RawToken {
        self.cursor.advance(); // consume prefix letter
        let digits_start = self.cursor.pos();
        self.cursor.eat_while(is_digit);
        if self.cursor.pos() == digits_start {
            self.cursor.eat_while(is_ident_continue);
            return self.token(start, err);
        }
        self.digits_end(start, ok, err)
    }

    /// `$` and `#` start a hex literal when a hex digit follows.
    fn hex_or_punct(&mut self, start: u32, punct: RawTag) -> RawToken {
        self.cursor.advance();
        if !self.cursor.current().is_ascii_hexdigit() {
            return self.token(start, punct);
        }
        self.cursor.eat_while(|b| b.is_ascii_hexdigit());
        self.digits_end(start, RawTag::HexInt, RawTag::InvalidHex)
    }

    /// After the digits of a literal: any identifier character glued to
    /// them turns the whole run into an error token.
    fn digits_end(&mut self, start: u32, ok: RawTag, err: RawTag) -> RawToken {
        if is_ident_continue(self.cursor.current()) {
            self.cursor.eat_while(is_ident_continue);
            return self.token(start, err);
        }
        self.token(start, ok)
    }

    // Operators

    #[inline]
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// Greedy two-byte operator: `first second` if `second` follows,
    /// otherwise the one-byte fallback.
    fn pair(&mut self, start: u32, second: u8, double: RawTag, single: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == second {
            self.cursor.advance();
            self.token(start, double)
        } else {
            self.token(start, single)
        }
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '<'
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::LessEqual)
            }
            b'<' => {
                self.cursor.advance();
                self.token(start, RawTag::Shl)
            }
            _ => self.token(start, RawTag::Less),
        }
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '>'
        match self.cursor.current() {
            b'=' => {
                self.cursor.advance();
                self.token(start, RawTag::GreaterEqual)
            }
            b'>' => {
                self.cursor.advance();
                self.token(start, RawTag::Shr)
            }
            _ => self.token(start, RawTag::Greater),
        }
    }

    /// Anything else. A non-ASCII lead byte takes its whole UTF-8 sequence
    /// so the error can name the character.
    fn invalid_byte(&mut self, start: u32) -> RawToken {
        let width = Cursor::utf8_char_width(self.cursor.current());
        let remaining = self.cursor.source_len() - start;
        self.cursor.advance_n(width.min(remaining).max(1));
        self.token(start, RawTag::InvalidByte)
    }
}

/// Bytes that may continue an identifier.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.'
}
