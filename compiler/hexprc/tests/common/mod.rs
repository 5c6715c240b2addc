//! Shared test host.
//!
//! Memory reads are pure functions of the address (byte: `addr + 0x10`,
//! word: `addr - 0xb0`, dword: `addr * 4`) so results are easy to predict.
//! Variables live in one 32-bit little-endian value, `VALUE_32`, exposed at
//! every width and offset the tests need.

#![allow(dead_code, clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hexprc::{
    compile, CompiledExpr, Evaluator, ExprError, HostFunction, HostMemory, Resolver, Value,
    ValuePtr,
};

pub const VALUE_32: u32 = 0x0aba_cada;

pub struct TestHost {
    pub memory: HostMemory,
    pub pc: Value,
    /// Number of host function calls so far.
    pub calls: Arc<AtomicUsize>,
}

impl TestHost {
    pub fn new() -> Self {
        TestHost {
            memory: HostMemory::new(VALUE_32.to_le_bytes().to_vec()),
            pc: 0x4000,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Resolver for TestHost {
    fn resolve_function(&self, name: &str, arity: usize) -> Option<HostFunction> {
        let calls = Arc::clone(&self.calls);
        let tick = move || {
            calls.fetch_add(1, Ordering::SeqCst);
        };
        match (name, arity) {
            ("fn0", 0) => Some(HostFunction::nullary(move || {
                tick();
                0x7777
            })),
            ("fn1", 1) => Some(HostFunction::unary(move |v| {
                tick();
                0x8888_i32.wrapping_add(v)
            })),
            ("fn2", 2) => Some(HostFunction::binary(move |a, b| {
                tick();
                0x9999_i32.wrapping_add(a.wrapping_mul(b))
            })),
            ("fn3", 3) => Some(HostFunction::ternary(move |a, b, c| {
                tick();
                0xaaaa_i32.wrapping_add(a.wrapping_mul(b).wrapping_sub(c))
            })),
            _ => None,
        }
    }

    fn resolve_variable(&self, name: &str) -> Option<ValuePtr> {
        let mem = |offset, size| Some(ValuePtr::memory(self.memory.at(offset), size));
        match name {
            "var.8" => mem(0, 1),
            "var.8.1" => mem(1, 1),
            "var.16" => mem(0, 2),
            "var.16.1" => mem(1, 2),
            "var.24" => mem(0, 3),
            "var.32" | "var_32" => mem(0, 4),
            "varFn" => Some(ValuePtr::callback(|| 0xb0b0)),
            "af'" => Some(ValuePtr::callback(|| 0xbccb)),
            "bad.width" => mem(0, 5),
            _ => None,
        }
    }
}

impl Evaluator for TestHost {
    fn pc(&self) -> Value {
        self.pc
    }

    fn mem_byte(&self, address: Value) -> u8 {
        address.wrapping_add(0x10).to_le_bytes()[0]
    }

    fn mem_word(&self, address: Value) -> u16 {
        let [lo, hi, ..] = address.wrapping_sub(0xb0).to_le_bytes();
        u16::from_le_bytes([lo, hi])
    }

    fn mem_dword(&self, address: Value) -> u32 {
        address.wrapping_mul(4).cast_unsigned()
    }
}

pub fn compile_ok(source: &str) -> CompiledExpr {
    compile(source, &TestHost::new()).unwrap_or_else(|err| panic!("{source:?}: {err}"))
}

/// Compile and evaluate against a fresh host.
pub fn eval(source: &str) -> Result<Value, ExprError> {
    let host = TestHost::new();
    compile(source, &host)?.evaluate(&host)
}

pub fn value(source: &str) -> Value {
    eval(source).unwrap_or_else(|err| panic!("{source:?}: {err}"))
}

/// The message of whichever stage fails first.
pub fn message(source: &str) -> String {
    match eval(source) {
        Ok(v) => panic!("{source:?} evaluated to {v}"),
        Err(err) => err.to_string(),
    }
}
