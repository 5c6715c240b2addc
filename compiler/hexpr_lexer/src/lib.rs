//! Lexer for the expression language.
//!
//! Drives the raw scanner from `hexpr_lexer_core` and cooks each raw token
//! into a `TokenKind`: numbers are decoded with 32-bit wraparound,
//! identifiers are length-checked, and error tags become `ExprError`s.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → TokenCooker → TokenList
//! ```
//!
//! Lexing stops at the first error; no partial token list escapes.

mod cooker;
mod parse_helpers;

use hexpr_diagnostic::ExprError;
use hexpr_ir::{Span, Token, TokenKind, TokenList};
use hexpr_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker::TokenCooker;

/// Lex `source` into a token list ending with `Eof`.
///
/// # Errors
///
/// Returns the first lexical error: a malformed number, a leading-zero
/// decimal, an over-long identifier, or a character that starts no token.
pub fn lex(source: &str) -> Result<TokenList, ExprError> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let cooker = TokenCooker::new(source);
    let mut tokens = TokenList::with_capacity(source.len() / 2 + 1);
    let mut offset = 0u32;

    loop {
        let raw = scanner.next_token();
        if raw.tag == RawTag::Eof {
            tokens.push(Token::new(TokenKind::Eof, Span::point(offset)));
            break;
        }
        if !raw.tag.is_trivia() {
            let kind = cooker.cook(raw.tag, offset, raw.len).inspect_err(|err| {
                tracing::debug!(error = %err, offset, "lex failed");
            })?;
            let span = Span::new(offset, offset + raw.len);
            tracing::trace!(?kind, %span, "token");
            tokens.push(Token::new(kind, span));
        }
        offset += raw.len;
    }

    tracing::debug!(count = tokens.len(), "lexed");
    Ok(tokens)
}

#[cfg(test)]
mod tests;
