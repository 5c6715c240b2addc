//! Raw token tags produced by the scanner.

/// Kind of a raw token. Error conditions are tags too, so the scanner
/// never fails; it always advances by at least one byte until `Eof`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // Trivia
    /// Run of spaces, tabs, CR and LF.
    Whitespace,

    // Literals
    /// `[A-Za-z_.][A-Za-z0-9_.]*` with an optional trailing `'`.
    Ident,
    /// Decimal digits.
    DecInt,
    /// `0x`/`0X` followed by hex digits, or `$`/`#` followed by hex digits.
    HexInt,
    /// `0b`/`0B` followed by binary digits.
    BinInt,
    /// `0o`/`0O` followed by octal digits.
    OctInt,

    // Punctuation
    At,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Question,
    Colon,
    Hash,
    Dollar,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Tilde,
    Ampersand,
    AmpersandAmpersand,
    Pipe,
    PipePipe,
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Less,
    LessEqual,
    Shl,
    Greater,
    GreaterEqual,
    Shr,

    // Errors
    /// Hex literal with no digits or with trailing identifier characters.
    InvalidHex,
    /// Binary literal with no digits or with trailing identifier characters.
    InvalidBinary,
    /// Octal literal with no digits or with trailing identifier characters.
    InvalidOctal,
    /// Decimal literal followed by a letter, `_` or `.`.
    InvalidDecimal,
    /// `0` followed by another decimal digit.
    LeadingZero,
    /// A character that starts no token. Covers a whole UTF-8 sequence.
    InvalidByte,
    /// `0x00` before the end of input.
    InteriorNull,

    /// End of input. Always has `len == 0`.
    Eof,
}

impl RawTag {
    /// Returns `true` for tags that the cooking layer must report as errors.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::InvalidHex
                | RawTag::InvalidBinary
                | RawTag::InvalidOctal
                | RawTag::InvalidDecimal
                | RawTag::LeadingZero
                | RawTag::InvalidByte
                | RawTag::InteriorNull
        )
    }

    /// Returns `true` for tags the cooking layer skips.
    pub fn is_trivia(self) -> bool {
        self == RawTag::Whitespace
    }
}

/// A raw token: a tag plus its length in bytes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
