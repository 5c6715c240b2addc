//! Error codes for every diagnostic.
//!
//! Each code is a unique identifier (e.g. `E1002`) whose first digit names
//! the stage that raised it.

use std::fmt;

/// Error codes.
///
/// Format: E#### where the first digit indicates the stage:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E2xxx: Name resolution errors
/// - E3xxx: Evaluation errors
/// - E9xxx: Internal errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Malformed hexadecimal literal
    E0001,
    /// Malformed binary literal
    E0002,
    /// Malformed octal literal
    E0003,
    /// Malformed decimal literal
    E0004,
    /// Decimal literal with a leading zero
    E0005,
    /// Identifier longer than the cap
    E0006,
    /// Character that starts no token
    E0007,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Unclosed parenthesis
    E1002,
    /// Unclosed bracket
    E1003,
    /// `@` not followed by `[`
    E1004,
    /// Conditional without `:`
    E1005,
    /// Argument list without `,` or `)`
    E1006,
    /// More arguments than any function may take
    E1007,

    // Resolution Errors (E2xxx)
    /// Unknown identifier
    E2001,
    /// Unknown function
    E2002,
    /// Unknown memory data type
    E2003,
    /// Argument count mismatch
    E2004,

    // Evaluation Errors (E3xxx)
    /// Division or remainder by zero
    E3001,

    // Internal Errors (E9xxx)
    /// Inconsistent host binding
    E9001,
}

/// Coarse classification of an error code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Resolution,
    Evaluation,
    Internal,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E0006,
        ErrorCode::E0007,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E3001,
        ErrorCode::E9001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E0007 => "E0007",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E3001 => "E3001",
            ErrorCode::E9001 => "E9001",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::E0001
            | ErrorCode::E0002
            | ErrorCode::E0003
            | ErrorCode::E0004
            | ErrorCode::E0005
            | ErrorCode::E0006
            | ErrorCode::E0007 => ErrorCategory::Lexical,
            ErrorCode::E1001
            | ErrorCode::E1002
            | ErrorCode::E1003
            | ErrorCode::E1004
            | ErrorCode::E1005
            | ErrorCode::E1006
            | ErrorCode::E1007 => ErrorCategory::Syntax,
            ErrorCode::E2001 | ErrorCode::E2002 | ErrorCode::E2003 | ErrorCode::E2004 => {
                ErrorCategory::Resolution
            }
            ErrorCode::E3001 => ErrorCategory::Evaluation,
            ErrorCode::E9001 => ErrorCategory::Internal,
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        self.category() == ErrorCategory::Lexical
    }

    pub fn is_parser_error(&self) -> bool {
        self.category() == ErrorCategory::Syntax
    }

    pub fn is_resolution_error(&self) -> bool {
        self.category() == ErrorCategory::Resolution
    }

    pub fn is_eval_error(&self) -> bool {
        self.category() == ErrorCategory::Evaluation
    }

    pub fn is_internal_error(&self) -> bool {
        self.category() == ErrorCategory::Internal
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}
