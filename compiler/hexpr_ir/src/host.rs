//! Host bindings: the functions and variables a resolver hands to the parser.
//!
//! Everything here is cheaply cloneable and `Send + Sync`, so a compiled
//! tree that captured these handles can be shared across threads.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::Value;

/// Callback that produces a variable's current value.
pub type ValueFn = Arc<dyn Fn() -> Value + Send + Sync>;
/// Host function taking no arguments.
pub type NullaryFn = Arc<dyn Fn() -> Value + Send + Sync>;
/// Host function taking one argument.
pub type UnaryFn = Arc<dyn Fn(Value) -> Value + Send + Sync>;
/// Host function taking two arguments.
pub type BinaryFn = Arc<dyn Fn(Value, Value) -> Value + Send + Sync>;
/// Host function taking three arguments.
pub type TernaryFn = Arc<dyn Fn(Value, Value, Value) -> Value + Send + Sync>;

/// A host function of fixed arity (0 to 3 arguments).
#[derive(Clone)]
pub enum HostFunction {
    Nullary(NullaryFn),
    Unary(UnaryFn),
    Binary(BinaryFn),
    Ternary(TernaryFn),
}

impl HostFunction {
    pub fn nullary(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        HostFunction::Nullary(Arc::new(f))
    }

    pub fn unary(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        HostFunction::Unary(Arc::new(f))
    }

    pub fn binary(f: impl Fn(Value, Value) -> Value + Send + Sync + 'static) -> Self {
        HostFunction::Binary(Arc::new(f))
    }

    pub fn ternary(f: impl Fn(Value, Value, Value) -> Value + Send + Sync + 'static) -> Self {
        HostFunction::Ternary(Arc::new(f))
    }

    /// Number of arguments this function takes.
    pub fn arity(&self) -> usize {
        match self {
            HostFunction::Nullary(_) => 0,
            HostFunction::Unary(_) => 1,
            HostFunction::Binary(_) => 2,
            HostFunction::Ternary(_) => 3,
        }
    }

    /// Invoke the function.
    ///
    /// Returns `None` if `args.len()` does not match the arity.
    pub fn call(&self, args: &[Value]) -> Option<Value> {
        match (self, args) {
            (HostFunction::Nullary(f), []) => Some(f()),
            (HostFunction::Unary(f), &[a]) => Some(f(a)),
            (HostFunction::Binary(f), &[a, b]) => Some(f(a, b)),
            (HostFunction::Ternary(f), &[a, b, c]) => Some(f(a, b, c)),
            _ => None,
        }
    }
}

impl fmt::Debug for HostFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostFunction/{}", self.arity())
    }
}

/// Byte buffer owned by the host and read by compiled trees.
///
/// The host may keep writing to the buffer after compilation; evaluation
/// always sees the bytes as they are at that moment.
#[derive(Clone, Default)]
pub struct HostMemory(Arc<RwLock<Vec<u8>>>);

impl HostMemory {
    pub fn new(bytes: Vec<u8>) -> Self {
        HostMemory(Arc::new(RwLock::new(bytes)))
    }

    /// Current length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    /// Overwrite `bytes.len()` bytes starting at `offset`.
    ///
    /// Returns `false` and leaves the buffer untouched if the write would
    /// run past the end.
    pub fn write(&self, offset: usize, bytes: &[u8]) -> bool {
        let mut buf = self.0.write();
        let Some(end) = offset.checked_add(bytes.len()) else {
            return false;
        };
        match buf.get_mut(offset..end) {
            Some(dst) => {
                dst.copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }

    /// Location `offset` bytes into this buffer.
    pub fn at(&self, offset: usize) -> MemoryRef {
        MemoryRef {
            memory: self.clone(),
            offset,
        }
    }
}

impl fmt::Debug for HostMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostMemory({} bytes)", self.len())
    }
}

/// A location inside a `HostMemory` buffer.
#[derive(Clone, Debug)]
pub struct MemoryRef {
    pub memory: HostMemory,
    pub offset: usize,
}

impl MemoryRef {
    /// Read `width` bytes (1 to 4) as a little-endian unsigned integer.
    ///
    /// Returns `None` if the width is unsupported or the bytes are out of
    /// bounds.
    pub fn read(&self, width: usize) -> Option<u32> {
        if !(1..=4).contains(&width) {
            return None;
        }
        let buf = self.memory.0.read();
        let end = self.offset.checked_add(width)?;
        let bytes = buf.get(self.offset..end)?;
        Some(
            bytes
                .iter()
                .rev()
                .fold(0u32, |acc, &b| (acc << 8) | u32::from(b)),
        )
    }
}

/// What a resolver returns for a variable name.
///
/// Exactly one of `read_value` and `location` must be set. When
/// `location` is set, `size_in_bytes` gives the width (1 to 4) read from
/// it; the parser rejects anything else as an internal error.
#[derive(Clone, Default)]
pub struct ValuePtr {
    pub read_value: Option<ValueFn>,
    pub location: Option<MemoryRef>,
    pub size_in_bytes: usize,
}

impl ValuePtr {
    /// Variable whose value comes from a callback.
    pub fn callback(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        ValuePtr {
            read_value: Some(Arc::new(f)),
            location: None,
            size_in_bytes: 0,
        }
    }

    /// Variable stored in host memory, `size_in_bytes` wide.
    pub fn memory(location: MemoryRef, size_in_bytes: usize) -> Self {
        ValuePtr {
            read_value: None,
            location: Some(location),
            size_in_bytes,
        }
    }
}

impl fmt::Debug for ValuePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValuePtr")
            .field("read_value", &self.read_value.as_ref().map(|_| "<fn>"))
            .field("location", &self.location)
            .field("size_in_bytes", &self.size_in_bytes)
            .finish()
    }
}
