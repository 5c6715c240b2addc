//! hexprc - embeddable expression compiler.
//!
//! Compiles C-like integer expressions such as `w@[$ + 2] & 0xff` against a
//! host's symbols, then evaluates the result against the host's memory and
//! program counter as many times as needed.
//!
//! ```text
//! let expr = hexprc::compile("(label + 2) * 2", &symbols)?;
//! let a = expr.evaluate(&cpu_state)?;
//! ```
//!
//! # Pipeline
//!
//! `hexpr_lexer` → `hexpr_parse` (resolves names through a [`Resolver`]) →
//! `hexpr_eval` (reads memory through an [`Evaluator`]). Every stage fails
//! with the same [`ExprError`].

pub mod commands;

use std::fmt;
use std::sync::Once;

pub use hexpr_diagnostic::{
    ColorMode, ErrorCategory, ErrorCode, ExprError, ExprErrorKind, TerminalEmitter,
};
pub use hexpr_eval::{Evaluator, NoContext};
pub use hexpr_ir::{
    Expr, HostFunction, HostMemory, MemoryRef, Span, UnsignedValue, Value, ValuePtr,
    MAX_FUNC_ARGS, MAX_IDENT_LEN,
};
pub use hexpr_parse::{NoResolver, Resolver};

/// A parsed expression with every name bound to the host.
///
/// Immutable and `Send + Sync`; evaluate it as often as needed, from as many
/// threads as the host's `Evaluator` allows.
#[derive(Clone)]
pub struct CompiledExpr {
    expr: Expr,
}

impl CompiledExpr {
    /// Evaluate against `context`.
    ///
    /// # Errors
    ///
    /// Returns `division by zero.` for a zero divisor, or `internal error.`
    /// when a host memory binding is out of bounds.
    pub fn evaluate(&self, context: &dyn Evaluator) -> Result<Value, ExprError> {
        hexpr_eval::evaluate(&self.expr, context)
    }

    /// The syntax tree.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn into_expr(self) -> Expr {
        self.expr
    }
}

impl fmt::Debug for CompiledExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompiledExpr({})", self.expr)
    }
}

/// Compile `source` against `resolver`.
///
/// # Errors
///
/// Returns the first lexical, syntax or resolution error. Nothing built
/// before the error survives it.
pub fn compile(source: &str, resolver: &dyn Resolver) -> Result<CompiledExpr, ExprError> {
    let expr = hexpr_parse::parse_source(source, resolver)?;
    Ok(CompiledExpr { expr })
}

/// Compile and evaluate once.
///
/// # Errors
///
/// Returns the first error from either stage.
pub fn eval_str(
    source: &str,
    resolver: &dyn Resolver,
    context: &dyn Evaluator,
) -> Result<Value, ExprError> {
    compile(source, resolver)?.evaluate(context)
}

static TRACING_INIT: Once = Once::new();

/// Install a hierarchical stderr subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
/// Enable with `RUST_LOG=hexpr_parse=trace` or `RUST_LOG=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .with(filter)
                .init();
        }
    });
}
