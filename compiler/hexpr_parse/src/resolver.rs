//! Host name resolution.

use hexpr_ir::{HostFunction, ValuePtr};

/// Maps names in an expression to host functions and variables.
///
/// Consulted only while parsing; the resolved handles are stored in the
/// tree, so evaluation never looks a name up again. Both methods default
/// to "not found".
pub trait Resolver {
    /// Return the host function `name` taking exactly `arity` arguments.
    ///
    /// The parser asks for every arity from 0 to `MAX_FUNC_ARGS`. A
    /// returned function whose `arity()` differs from `arity` is an
    /// internal error.
    fn resolve_function(&self, name: &str, arity: usize) -> Option<HostFunction> {
        let _ = (name, arity);
        None
    }

    /// Return the location or callback backing variable `name`.
    fn resolve_variable(&self, name: &str) -> Option<ValuePtr> {
        let _ = name;
        None
    }
}

/// Resolves nothing. Expressions may still use literals, `$` and memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoResolver;

impl Resolver for NoResolver {}

impl<R: Resolver + ?Sized> Resolver for &R {
    fn resolve_function(&self, name: &str, arity: usize) -> Option<HostFunction> {
        (**self).resolve_function(name, arity)
    }

    fn resolve_variable(&self, name: &str) -> Option<ValuePtr> {
        (**self).resolve_variable(name)
    }
}
