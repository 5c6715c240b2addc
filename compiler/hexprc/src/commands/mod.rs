//! Command handlers for the `hexpr` CLI.
//!
//! Argument parsing and every subcommand live here so they can be tested
//! without spawning the binary; `main.rs` only prints what these return.

mod host;
mod options;

pub use host::CliHost;
pub use options::{parse_number, Options, Register};

use std::fmt::Write as _;
use std::path::PathBuf;

use hexpr_diagnostic::ExprError;
use hexpr_parse::Resolver;
use thiserror::Error;

/// Subcommands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Compile and evaluate, print decimal and hex.
    Eval,
    /// Print the token stream.
    Lex,
    /// Print the syntax tree.
    Parse,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eval" => Some(Command::Eval),
            "lex" => Some(Command::Lex),
            "parse" => Some(Command::Parse),
            _ => None,
        }
    }
}

/// A fully parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub source: String,
    pub options: Options,
}

/// Bad command line. Reported with usage text and exit status 2.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing command")]
    MissingCommand,
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("missing expression")]
    MissingExpression,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid number '{value}' for {option}")]
    InvalidNumber { option: &'static str, value: String },
    #[error("expected <name>=<value> for {option}, got '{value}'")]
    MalformedDefinition { option: &'static str, value: String },
    #[error("invalid width '{0}' (expected 1 to 4)")]
    InvalidWidth(String),
    #[error("invalid color mode '{0}' (expected auto, always or never)")]
    InvalidColor(String),
}

/// Failure while running a valid command line. Exit status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Expr(#[from] ExprError),
    #[error("cannot read memory image '{}': {source}", path.display())]
    Memory {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Parse `args` (without the program name).
///
/// The first argument names the command. Of the rest, arguments starting
/// with `--` are options and exactly one other argument is the expression.
/// A lone `-` or a negative number such as `-1` is an expression, not an
/// option.
pub fn parse_args(args: &[String]) -> Result<Invocation, UsageError> {
    let (name, rest) = args.split_first().ok_or(UsageError::MissingCommand)?;
    let command =
        Command::from_name(name).ok_or_else(|| UsageError::UnknownCommand(name.clone()))?;

    let mut options = Options::default();
    let mut source = None;
    for arg in rest {
        if arg.starts_with("--") {
            options.apply(arg)?;
        } else if source.is_none() {
            source = Some(arg.clone());
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(Invocation {
        command,
        source: source.ok_or(UsageError::MissingExpression)?,
        options,
    })
}

/// Load `--mem`, or an empty image.
fn load_image(options: &Options) -> Result<Vec<u8>, CliError> {
    let Some(path) = &options.mem else {
        return Ok(Vec::new());
    };
    std::fs::read(path).map_err(|source| CliError::Memory {
        path: path.clone(),
        source,
    })
}

/// Run `invocation` and return what it prints on success.
pub fn run(invocation: &Invocation) -> Result<String, CliError> {
    let source = invocation.source.as_str();
    match invocation.command {
        Command::Lex => lex_source(source),
        Command::Parse => {
            let host = CliHost::new(&invocation.options, Vec::new());
            parse_source(source, &host)
        }
        Command::Eval => {
            let host = CliHost::new(&invocation.options, load_image(&invocation.options)?);
            let value = crate::eval_str(source, &host, &host)?;
            Ok(format_value(value))
        }
    }
}

/// One token per line, with its byte span.
pub fn lex_source(source: &str) -> Result<String, CliError> {
    let tokens = hexpr_lexer::lex(source)?;
    let mut out = String::new();
    for token in &tokens {
        let _ = writeln!(out, "{token:?}");
    }
    Ok(out)
}

/// The syntax tree as an s-expression.
pub fn parse_source(source: &str, resolver: &dyn Resolver) -> Result<String, CliError> {
    let compiled = crate::compile(source, resolver)?;
    Ok(format!("{}\n", compiled.expr()))
}

/// `decimal hex`, hex showing the unsigned 32-bit pattern.
pub fn format_value(value: hexpr_ir::Value) -> String {
    format!("{value} {:#010x}\n", value.cast_unsigned())
}

#[cfg(test)]
mod tests;
