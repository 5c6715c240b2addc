//! Parser tests.
//!
//! `TestResolver` mirrors a small host: a 32-bit value in host memory
//! exposed through variables of every width, two callback variables, and
//! one function per arity.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use hexpr_ir::{HostFunction, HostMemory, ValuePtr};

use crate::Resolver;

pub(crate) const VALUE_32: u32 = 0x0aba_cada;

pub(crate) struct TestResolver {
    memory: HostMemory,
}

impl TestResolver {
    pub(crate) fn new() -> Self {
        TestResolver {
            memory: HostMemory::new(VALUE_32.to_le_bytes().to_vec()),
        }
    }
}

impl Resolver for TestResolver {
    fn resolve_function(&self, name: &str, arity: usize) -> Option<HostFunction> {
        match (name, arity) {
            ("fn0", 0) => Some(HostFunction::nullary(|| 0x7777)),
            ("fn1", 1) => Some(HostFunction::unary(|v| 0x8888 + v)),
            ("fn2", 2) => Some(HostFunction::binary(|a, b| 0x9999 + a * b)),
            ("fn3", 3) => Some(HostFunction::ternary(|a, b, c| 0xaaaa + (a * b - c))),
            // Claims arity 2 but hands back a unary function.
            ("liar", 2) => Some(HostFunction::unary(|v| v)),
            _ => None,
        }
    }

    fn resolve_variable(&self, name: &str) -> Option<ValuePtr> {
        let mem = |offset, size| Some(ValuePtr::memory(self.memory.at(offset), size));
        match name {
            "var.8" => mem(0, 1),
            "var.8.1" => mem(1, 1),
            "var.16" => mem(0, 2),
            "var.16.1" => mem(2, 2),
            "var.24" => mem(0, 3),
            "var.32" | "var_32" => mem(0, 4),
            "varFn" => Some(ValuePtr::callback(|| 0xb0b0)),
            "af'" => Some(ValuePtr::callback(|| 0xbccb)),
            "bad.width" => mem(0, 5),
            "bad.none" => Some(ValuePtr::default()),
            "bad.both" => {
                let mut ptr = ValuePtr::callback(|| 0);
                ptr.location = Some(self.memory.at(0));
                ptr.size_in_bytes = 1;
                Some(ptr)
            }
            _ => None,
        }
    }
}
