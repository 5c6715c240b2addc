//! Expression grammar.
//!
//! Precedence, loosest to tightest:
//!
//! ```text
//! conditional   c ? a : b          right-assoc, branches are full expressions
//! logical or    ||
//! logical and   &&
//! bitwise or    |
//! bitwise xor   ^
//! bitwise and   &
//! equality      = == !=
//! relational    < <= > >=
//! shift         << >>
//! additive      + -
//! multiplicative * / %
//! unary         - ! ~              right-recursive
//! primary       literal, $, (e), [e], t@[e], f(args), name
//! ```
//!
//! - `mod.rs`: entry point and the binary ladder
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, memory reads, calls, variables

mod operators;
mod primary;

use hexpr_diagnostic::{ExprError, ExprErrorKind};
use hexpr_ir::{BinaryOp, Expr, ExprKind, TokenKind};
use hexpr_stack::ensure_sufficient_stack;

use crate::Parser;

type Level<'a> = fn(&mut Parser<'a>) -> Result<Expr, ExprError>;
type Matcher<'a> = fn(&Parser<'a>) -> Option<BinaryOp>;

impl<'a> Parser<'a> {
    /// Parse a full expression.
    ///
    /// Uses `ensure_sufficient_stack` since parentheses, brackets, call
    /// arguments and conditional branches all re-enter here.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        ensure_sufficient_stack(|| self.parse_conditional())
    }

    /// `cond ? then : else`. Both branches recurse into `parse_expr`, so
    /// `a ? b : c ? d : e` nests to the right.
    fn parse_conditional(&mut self) -> Result<Expr, ExprError> {
        let cond = self.parse_logical_or()?;
        if !self.eat(&TokenKind::Question) {
            return Ok(cond);
        }
        let then_expr = self.parse_expr()?;
        self.expect(&TokenKind::Colon, ExprErrorKind::MissingColon)?;
        let else_expr = self.parse_expr()?;

        let span = cond.span.merge(else_expr.span);
        Ok(Expr::new(
            ExprKind::Conditional {
                cond: Box::new(cond),
                then_expr: Box::new(then_expr),
                else_expr: Box::new(else_expr),
            },
            span,
        ))
    }

    /// One left-associative level: `next (op next)*`.
    fn parse_binary_level(
        &mut self,
        next: Level<'a>,
        matcher: Matcher<'a>,
    ) -> Result<Expr, ExprError> {
        let mut left = next(self)?;

        while let Some(op) = matcher(self) {
            self.advance();
            let right = next(self)?;

            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }

        Ok(left)
    }

    /// Parse `||`.
    fn parse_logical_or(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_logical_and, Self::match_logical_or_op)
    }

    /// Parse `&&`.
    fn parse_logical_and(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_bitwise_or, Self::match_logical_and_op)
    }

    /// Parse `|`.
    fn parse_bitwise_or(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_bitwise_xor, Self::match_bitwise_or_op)
    }

    /// Parse `^`.
    fn parse_bitwise_xor(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_bitwise_and, Self::match_bitwise_xor_op)
    }

    /// Parse `&`.
    fn parse_bitwise_and(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_equality, Self::match_bitwise_and_op)
    }

    /// Parse `=`, `==` and `!=`.
    fn parse_equality(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_relational, Self::match_equality_op)
    }

    /// Parse `<`, `<=`, `>` and `>=`.
    fn parse_relational(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_shift, Self::match_comparison_op)
    }

    /// Parse `<<` and `>>`.
    fn parse_shift(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_additive, Self::match_shift_op)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_multiplicative, Self::match_additive_op)
    }

    /// Parse `*`, `/` and `%`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ExprError> {
        self.parse_binary_level(Self::parse_unary, Self::match_multiplicative_op)
    }

    /// Parse prefix `-`, `!` and `~`. Right-recursive, so `--x` is
    /// `-(-x)`; each level is stack-guarded.
    fn parse_unary(&mut self) -> Result<Expr, ExprError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };
        let op_span = self.current_span();
        self.advance();

        let operand = ensure_sufficient_stack(|| self.parse_unary())?;
        let span = op_span.merge(operand.span);
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        ))
    }
}
