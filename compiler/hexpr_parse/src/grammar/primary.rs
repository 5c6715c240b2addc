//! Primary expressions: literals, `$`, parentheses, memory reads, calls
//! and variables.
//!
//! Identifiers are resolved here, against the host resolver, at the
//! moment they are parsed.

use hexpr_diagnostic::{ExprError, ExprErrorKind};
use hexpr_ir::{
    DirectRead, DirectWidth, Expr, ExprKind, HostFunction, MemWidth, Span, TokenKind, ValuePtr,
    MAX_FUNC_ARGS,
};
use smallvec::SmallVec;

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ExprError> {
        let token = self.current();
        match &token.kind {
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expr::new(ExprKind::Number(*n), token.span))
            }
            TokenKind::Dollar => {
                self.advance();
                Ok(Expr::new(ExprKind::ProgramCounter, token.span))
            }
            TokenKind::LParen => {
                self.advance();
                let mut inner = self.parse_expr()?;
                let close = self.expect(&TokenKind::RParen, ExprErrorKind::MissingParen)?;
                inner.span = token.span.merge(close);
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.advance();
                let (address, close) = self.parse_memory_tail()?;
                Ok(memory(MemWidth::Byte, address, token.span.merge(close)))
            }
            TokenKind::Ident(name) => match self.cursor.peek_kind() {
                TokenKind::LParen => self.parse_call(name, token.span),
                TokenKind::At => self.parse_typed_memory(name, token.span),
                _ => self.parse_variable(name, token.span),
            },
            _ => Err(self.error(ExprErrorKind::Syntax)),
        }
    }

    /// The address and closing `]` of a memory read; the cursor sits just
    /// past the `[`.
    fn parse_memory_tail(&mut self) -> Result<(Expr, Span), ExprError> {
        let address = self.parse_expr()?;
        let close = self.expect(&TokenKind::RBracket, ExprErrorKind::MissingBracket)?;
        Ok((address, close))
    }

    /// `tag @ [ address ]`. The tag is checked after the bracketed address
    /// has been parsed.
    fn parse_typed_memory(&mut self, tag: &str, tag_span: Span) -> Result<Expr, ExprError> {
        self.advance(); // tag
        self.advance(); // '@'
        self.expect(&TokenKind::LBracket, ExprErrorKind::MissingBracketAfterAt)?;
        let (address, close) = self.parse_memory_tail()?;

        let Some(width) = MemWidth::from_tag(tag) else {
            return Err(ExprError::new(
                ExprErrorKind::UnknownDataType(tag.to_owned()),
                tag_span,
            ));
        };
        tracing::trace!(tag, "memory read");
        Ok(memory(width, address, tag_span.merge(close)))
    }

    /// `name ( args )`.
    ///
    /// The name is resolved for every arity before the arguments are
    /// parsed. The expected count reported in errors is the smallest arity
    /// the host offers.
    fn parse_call(&mut self, name: &str, name_span: Span) -> Result<Expr, ExprError> {
        let mut overloads: [Option<HostFunction>; MAX_FUNC_ARGS + 1] =
            std::array::from_fn(|arity| self.resolver.resolve_function(name, arity));
        let Some(expected) = overloads.iter().position(Option::is_some) else {
            return Err(ExprError::new(
                ExprErrorKind::UnknownFunction(name.to_owned()),
                name_span,
            ));
        };

        self.advance(); // name
        self.advance(); // '('

        let mut args: SmallVec<[Expr; MAX_FUNC_ARGS]> = SmallVec::new();
        if !self.eat(&TokenKind::RParen) {
            loop {
                if args.len() >= MAX_FUNC_ARGS {
                    return Err(self.error(ExprErrorKind::TooManyArguments {
                        name: name.to_owned(),
                        expected,
                    }));
                }
                args.push(self.parse_expr()?);
                if self.eat(&TokenKind::RParen) {
                    break;
                }
                if !self.eat(&TokenKind::Comma) {
                    return Err(self.error(ExprErrorKind::MissingComma));
                }
            }
        }
        let span = name_span.merge(self.previous_span());

        let got = args.len();
        let Some(func) = overloads[got].take() else {
            return Err(ExprError::new(
                ExprErrorKind::ArgumentCount {
                    name: name.to_owned(),
                    expected,
                    got,
                },
                span,
            ));
        };
        if func.arity() != got {
            tracing::debug!(name, asked = got, returned = func.arity(), "resolver arity mismatch");
            return Err(ExprError::new(ExprErrorKind::Internal, name_span));
        }
        tracing::trace!(name, arity = got, "resolved function");

        Ok(Expr::new(
            ExprKind::Call {
                func,
                args: args.into_boxed_slice(),
            },
            span,
        ))
    }

    /// A bare identifier: a host variable.
    fn parse_variable(&mut self, name: &str, span: Span) -> Result<Expr, ExprError> {
        self.advance();
        let Some(ptr) = self.resolver.resolve_variable(name) else {
            return Err(ExprError::new(
                ExprErrorKind::UnknownIdentifier(name.to_owned()),
                span,
            ));
        };
        let read = direct_read(ptr).ok_or_else(|| {
            tracing::debug!(name, "resolver returned an inconsistent location");
            ExprError::new(ExprErrorKind::Internal, span)
        })?;
        tracing::trace!(name, ?read, "resolved variable");
        Ok(Expr::new(ExprKind::Direct(read), span))
    }
}

fn memory(width: MemWidth, address: Expr, span: Span) -> Expr {
    Expr::new(
        ExprKind::Memory {
            width,
            address: Box::new(address),
        },
        span,
    )
}

/// Exactly one of the two forms must be set, and a memory location needs
/// a width of 1 to 4 bytes.
fn direct_read(ptr: ValuePtr) -> Option<DirectRead> {
    match (ptr.read_value, ptr.location) {
        (Some(read), None) => Some(DirectRead::Callback(read)),
        (None, Some(location)) => Some(DirectRead::Memory {
            location,
            width: DirectWidth::from_size(ptr.size_in_bytes)?,
        }),
        _ => None,
    }
}
