//! The error type shared by the lexer, parser and evaluator.

use hexpr_ir::Span;
use thiserror::Error;

use crate::{ErrorCategory, ErrorCode};

/// What went wrong. `Display` is the exact message shown to users.
#[derive(Clone, Debug, Error, PartialEq, Eq, Hash)]
pub enum ExprErrorKind {
    // Lexical
    #[error("syntax error in hexadecimal number.")]
    InvalidHex,
    #[error("syntax error in binary number.")]
    InvalidBinary,
    #[error("syntax error in octal number.")]
    InvalidOctal,
    #[error("syntax error in number.")]
    InvalidNumber,
    #[error("numbers starting with '0' are not supported, use '0o' prefix for octal numbers.")]
    LeadingZero,
    #[error("identifier too long.")]
    IdentifierTooLong,
    #[error("unexpected character '{0}'.")]
    UnexpectedChar(char),

    // Syntax
    #[error("syntax error in expression.")]
    Syntax,
    #[error("missing ')'.")]
    MissingParen,
    #[error("missing ']'.")]
    MissingBracket,
    #[error("missing '[' after '@'.")]
    MissingBracketAfterAt,
    #[error("missing ':'.")]
    MissingColon,
    #[error("missing ','.")]
    MissingComma,
    #[error("too many arguments for function '{name}' (expected {expected}).")]
    TooManyArguments { name: String, expected: usize },

    // Resolution
    #[error("unknown identifier '{0}'.")]
    UnknownIdentifier(String),
    #[error("unknown function '{0}'.")]
    UnknownFunction(String),
    #[error("unknown data type '{0}'.")]
    UnknownDataType(String),
    #[error("invalid number of arguments for function '{name}' (expected {expected}, got {got}).")]
    ArgumentCount {
        name: String,
        expected: usize,
        got: usize,
    },

    // Evaluation
    #[error("division by zero.")]
    DivisionByZero,

    /// A host binding contradicts itself (bad width, both or neither
    /// location forms set, arity mismatch, out-of-range memory).
    #[error("internal error.")]
    Internal,
}

impl ExprErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ExprErrorKind::InvalidHex => ErrorCode::E0001,
            ExprErrorKind::InvalidBinary => ErrorCode::E0002,
            ExprErrorKind::InvalidOctal => ErrorCode::E0003,
            ExprErrorKind::InvalidNumber => ErrorCode::E0004,
            ExprErrorKind::LeadingZero => ErrorCode::E0005,
            ExprErrorKind::IdentifierTooLong => ErrorCode::E0006,
            ExprErrorKind::UnexpectedChar(_) => ErrorCode::E0007,
            ExprErrorKind::Syntax => ErrorCode::E1001,
            ExprErrorKind::MissingParen => ErrorCode::E1002,
            ExprErrorKind::MissingBracket => ErrorCode::E1003,
            ExprErrorKind::MissingBracketAfterAt => ErrorCode::E1004,
            ExprErrorKind::MissingColon => ErrorCode::E1005,
            ExprErrorKind::MissingComma => ErrorCode::E1006,
            ExprErrorKind::TooManyArguments { .. } => ErrorCode::E1007,
            ExprErrorKind::UnknownIdentifier(_) => ErrorCode::E2001,
            ExprErrorKind::UnknownFunction(_) => ErrorCode::E2002,
            ExprErrorKind::UnknownDataType(_) => ErrorCode::E2003,
            ExprErrorKind::ArgumentCount { .. } => ErrorCode::E2004,
            ExprErrorKind::DivisionByZero => ErrorCode::E3001,
            ExprErrorKind::Internal => ErrorCode::E9001,
        }
    }
}

/// An error raised while lexing, parsing or evaluating an expression.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct ExprError {
    pub kind: ExprErrorKind,
    /// Byte range of the offending input, when known.
    pub span: Option<Span>,
}

impl ExprError {
    #[cold]
    pub fn new(kind: ExprErrorKind, span: Span) -> Self {
        ExprError {
            kind,
            span: Some(span),
        }
    }

    #[cold]
    pub fn unlocated(kind: ExprErrorKind) -> Self {
        ExprError { kind, span: None }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[inline]
    pub fn category(&self) -> ErrorCategory {
        self.kind.code().category()
    }
}

impl From<ExprErrorKind> for ExprError {
    fn from(kind: ExprErrorKind) -> Self {
        ExprError::unlocated(kind)
    }
}
