//! Token cooking layer.
//!
//! Transforms `(RawTag, len)` pairs from the raw scanner into `TokenKind`
//! values. Each `RawTag` category has a dedicated path:
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: length cap, then owned text
//! - **Numerics**: prefix strip, then wrapping decode
//! - **Errors**: mapped to the matching `ExprErrorKind`

use hexpr_diagnostic::{ExprError, ExprErrorKind};
use hexpr_ir::{Span, TokenKind, MAX_IDENT_LEN};
use hexpr_lexer_core::RawTag;

use crate::parse_helpers::parse_int_wrapping;

/// Cooks raw tokens into parser-ready `TokenKind` values.
///
/// Stateless with respect to individual tokens; each `cook()` call is
/// independent.
pub(crate) struct TokenCooker<'src> {
    source: &'src str,
}

impl<'src> TokenCooker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self { source }
    }

    /// Cook one non-trivia raw token found at `offset`.
    pub(crate) fn cook(&self, tag: RawTag, offset: u32, len: u32) -> Result<TokenKind, ExprError> {
        let span = Span::new(offset, offset + len);
        let kind = match tag {
            RawTag::At => TokenKind::At,
            RawTag::Comma => TokenKind::Comma,
            RawTag::LeftParen => TokenKind::LParen,
            RawTag::RightParen => TokenKind::RParen,
            RawTag::LeftBracket => TokenKind::LBracket,
            RawTag::RightBracket => TokenKind::RBracket,
            RawTag::Question => TokenKind::Question,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Hash => TokenKind::Hash,
            RawTag::Dollar => TokenKind::Dollar,
            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Percent => TokenKind::Percent,
            RawTag::Caret => TokenKind::Caret,
            RawTag::Tilde => TokenKind::Tilde,
            RawTag::Ampersand => TokenKind::Amp,
            RawTag::AmpersandAmpersand => TokenKind::AmpAmp,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::PipePipe => TokenKind::PipePipe,
            RawTag::Bang => TokenKind::Bang,
            RawTag::BangEqual => TokenKind::NotEq,
            RawTag::Equal => TokenKind::Eq,
            RawTag::EqualEqual => TokenKind::EqEq,
            RawTag::Less => TokenKind::Lt,
            RawTag::LessEqual => TokenKind::LtEq,
            RawTag::Shl => TokenKind::Shl,
            RawTag::Greater => TokenKind::Gt,
            RawTag::GreaterEqual => TokenKind::GtEq,
            RawTag::Shr => TokenKind::Shr,

            RawTag::Ident => self.cook_ident(span)?,
            RawTag::DecInt => self.cook_int(span, 0, 10, ExprErrorKind::InvalidNumber)?,
            RawTag::HexInt => {
                // `0x` / `0X` or a single `$` / `#`
                let prefix = if self.text(span).starts_with('0') { 2 } else { 1 };
                self.cook_int(span, prefix, 16, ExprErrorKind::InvalidHex)?
            }
            RawTag::BinInt => self.cook_int(span, 2, 2, ExprErrorKind::InvalidBinary)?,
            RawTag::OctInt => self.cook_int(span, 2, 8, ExprErrorKind::InvalidOctal)?,

            RawTag::InvalidHex => return Err(ExprError::new(ExprErrorKind::InvalidHex, span)),
            RawTag::InvalidBinary => {
                return Err(ExprError::new(ExprErrorKind::InvalidBinary, span))
            }
            RawTag::InvalidOctal => {
                return Err(ExprError::new(ExprErrorKind::InvalidOctal, span))
            }
            RawTag::InvalidDecimal => {
                return Err(ExprError::new(ExprErrorKind::InvalidNumber, span))
            }
            RawTag::LeadingZero => return Err(ExprError::new(ExprErrorKind::LeadingZero, span)),
            RawTag::InvalidByte | RawTag::InteriorNull => {
                let c = self.text(span).chars().next().unwrap_or('\0');
                return Err(ExprError::new(ExprErrorKind::UnexpectedChar(c), span));
            }

            // The driver loop filters these.
            RawTag::Whitespace | RawTag::Eof => {
                return Err(ExprError::new(ExprErrorKind::Internal, span))
            }
        };
        Ok(kind)
    }

    fn text(&self, span: Span) -> &'src str {
        self.source.get(span.to_range()).unwrap_or("")
    }

    fn cook_ident(&self, span: Span) -> Result<TokenKind, ExprError> {
        if span.len() as usize > MAX_IDENT_LEN {
            return Err(ExprError::new(ExprErrorKind::IdentifierTooLong, span));
        }
        Ok(TokenKind::Ident(self.text(span).to_owned()))
    }

    fn cook_int(
        &self,
        span: Span,
        prefix: usize,
        radix: u32,
        err: ExprErrorKind,
    ) -> Result<TokenKind, ExprError> {
        self.text(span)
            .get(prefix..)
            .and_then(|digits| parse_int_wrapping(digits, radix))
            .map(TokenKind::Number)
            .ok_or_else(|| ExprError::new(err, span))
    }
}
