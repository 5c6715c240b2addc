//! Recursive descent parser for the expression language.
//!
//! Builds an owned `Expr` tree from a token list, resolving every
//! identifier against a host [`Resolver`] as it goes. Parsing stops at the
//! first error; intermediate subtrees are dropped on the way out, so a
//! failed parse leaves nothing behind.

mod cursor;
mod grammar;
mod resolver;

pub use cursor::Cursor;
pub use resolver::{NoResolver, Resolver};

use hexpr_diagnostic::{ExprError, ExprErrorKind};
use hexpr_ir::{Expr, Span, Token, TokenKind, TokenList};

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    resolver: &'a dyn Resolver,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, resolver: &'a dyn Resolver) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            resolver,
        }
    }

    /// Parse one complete expression. Any token left before `Eof` is a
    /// syntax error.
    pub fn parse_complete(mut self) -> Result<Expr, ExprError> {
        let expr = self.parse_expr()?;
        if !self.cursor.is_at_end() {
            return Err(self.error(ExprErrorKind::Syntax));
        }
        Ok(expr)
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn advance(&mut self) {
        self.cursor.advance();
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Error located at the current token.
    #[cold]
    fn error(&self, kind: ExprErrorKind) -> ExprError {
        ExprError::new(kind, self.current_span())
    }

    /// Consume `kind` or fail with `missing` at the current token.
    fn expect(&mut self, kind: &TokenKind, missing: ExprErrorKind) -> Result<Span, ExprError> {
        let span = self.current_span();
        if self.eat(kind) {
            Ok(span)
        } else {
            Err(self.error(missing))
        }
    }
}

/// Parse a lexed token list into a tree.
///
/// # Errors
///
/// Returns the first syntax or resolution error.
pub fn parse(tokens: &TokenList, resolver: &dyn Resolver) -> Result<Expr, ExprError> {
    let result = Parser::new(tokens, resolver).parse_complete();
    match &result {
        Ok(expr) => tracing::debug!(span = %expr.span, "parsed"),
        Err(err) => tracing::debug!(error = %err, span = ?err.span, "parse failed"),
    }
    result
}

/// Lex and parse `source` in one step.
///
/// # Errors
///
/// Returns the first lexical, syntax or resolution error.
pub fn parse_source(source: &str, resolver: &dyn Resolver) -> Result<Expr, ExprError> {
    let tokens = hexpr_lexer::lex(source)?;
    parse(&tokens, resolver)
}

#[cfg(test)]
mod tests;
