//! Operator matching helpers.

use hexpr_ir::{BinaryOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser<'_> {
    pub(crate) fn match_logical_or_op(&self) -> Option<BinaryOp> {
        matches!(self.current_kind(), TokenKind::PipePipe).then_some(BinaryOp::Or)
    }

    pub(crate) fn match_logical_and_op(&self) -> Option<BinaryOp> {
        matches!(self.current_kind(), TokenKind::AmpAmp).then_some(BinaryOp::And)
    }

    pub(crate) fn match_bitwise_or_op(&self) -> Option<BinaryOp> {
        matches!(self.current_kind(), TokenKind::Pipe).then_some(BinaryOp::BitOr)
    }

    pub(crate) fn match_bitwise_xor_op(&self) -> Option<BinaryOp> {
        matches!(self.current_kind(), TokenKind::Caret).then_some(BinaryOp::BitXor)
    }

    pub(crate) fn match_bitwise_and_op(&self) -> Option<BinaryOp> {
        matches!(self.current_kind(), TokenKind::Amp).then_some(BinaryOp::BitAnd)
    }

    /// `=` is an alias for `==`.
    pub(crate) fn match_equality_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Eq | TokenKind::EqEq => Some(BinaryOp::Eq),
            TokenKind::NotEq => Some(BinaryOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::LtEq => Some(BinaryOp::LtEq),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::GtEq => Some(BinaryOp::GtEq),
            _ => None,
        }
    }

    pub(crate) fn match_shift_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Shl => Some(BinaryOp::Shl),
            TokenKind::Shr => Some(BinaryOp::Shr),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current_kind() {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::Percent => Some(BinaryOp::Rem),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match self.current_kind() {
            TokenKind::Minus => Some(UnaryOp::Neg),
            TokenKind::Bang => Some(UnaryOp::Not),
            TokenKind::Tilde => Some(UnaryOp::BitNot),
            _ => None,
        }
    }
}
