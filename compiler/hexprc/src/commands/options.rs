//! Command-line option parsing.

use std::path::PathBuf;

use hexpr_diagnostic::ColorMode;
use hexpr_ir::{TokenKind, Value};

use super::UsageError;

/// A `--reg` definition: a memory-backed variable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register {
    pub name: String,
    pub value: Value,
    /// Width in bytes, 1 to 4.
    pub width: usize,
}

/// Options shared by every subcommand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Program counter (`--pc`).
    pub pc: Value,
    /// Callback variables (`--var`).
    pub vars: Vec<(String, Value)>,
    /// Memory-backed variables (`--reg`).
    pub regs: Vec<Register>,
    /// Flat memory image loaded at address 0 (`--mem`).
    pub mem: Option<PathBuf>,
    pub color: ColorMode,
}

impl Options {
    /// Apply one `--flag=value` argument.
    pub fn apply(&mut self, arg: &str) -> Result<(), UsageError> {
        if let Some(value) = arg.strip_prefix("--pc=") {
            self.pc = parse_number("--pc", value)?;
        } else if let Some(def) = arg.strip_prefix("--var=") {
            let (name, value) = split_definition("--var", def)?;
            self.vars.push((name.to_string(), parse_number("--var", value)?));
        } else if let Some(def) = arg.strip_prefix("--reg=") {
            self.regs.push(parse_register(def)?);
        } else if let Some(path) = arg.strip_prefix("--mem=") {
            self.mem = Some(PathBuf::from(path));
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            self.color =
                ColorMode::from_flag(mode).ok_or_else(|| UsageError::InvalidColor(mode.into()))?;
        } else {
            return Err(UsageError::UnknownOption(arg.into()));
        }
        Ok(())
    }
}

/// `name=value`, with a non-empty name.
fn split_definition<'a>(
    option: &'static str,
    def: &'a str,
) -> Result<(&'a str, &'a str), UsageError> {
    match def.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(UsageError::MalformedDefinition {
            option,
            value: def.into(),
        }),
    }
}

/// `name=value[:width]`
fn parse_register(def: &str) -> Result<Register, UsageError> {
    let (name, rest) = split_definition("--reg", def)?;
    let (value, width) = match rest.rsplit_once(':') {
        Some((value, width)) => {
            let width = width
                .parse::<usize>()
                .ok()
                .filter(|w| (1..=4).contains(w))
                .ok_or_else(|| UsageError::InvalidWidth(width.into()))?;
            (value, width)
        }
        None => (rest, 4),
    };
    Ok(Register {
        name: name.to_string(),
        value: parse_number("--reg", value)?,
        width,
    })
}

/// Parse a number written the way the expression language writes
/// literals (`42`, `0x2a`, `$2a`, `0b101010`, `0o52`), optionally negated.
///
/// Reuses the lexer, so option values and expressions always agree on
/// what a literal means.
pub fn parse_number(option: &'static str, text: &str) -> Result<Value, UsageError> {
    let invalid = || UsageError::InvalidNumber {
        option,
        value: text.into(),
    };
    let tokens = hexpr_lexer::lex(text).map_err(|_| invalid())?;
    let kinds: Vec<&TokenKind> = tokens.kinds().collect();
    match kinds.as_slice() {
        [TokenKind::Number(n), TokenKind::Eof] => Ok(*n),
        [TokenKind::Minus, TokenKind::Number(n), TokenKind::Eof] => Ok(n.wrapping_neg()),
        _ => Err(invalid()),
    }
}
