//! The host the `hexpr` tool evaluates against.
//!
//! Variables come from `--var` and `--reg`, memory from `--mem`, and a
//! handful of built-in functions cover common assembler arithmetic.

use hexpr_eval::Evaluator;
use hexpr_ir::{HostFunction, HostMemory, Value, ValuePtr};
use hexpr_parse::Resolver;
use rustc_hash::FxHashMap;

use super::options::Options;

/// Bytes reserved per `--reg` variable.
const REGISTER_SLOT: usize = std::mem::size_of::<Value>();

/// Symbol table plus memory image.
pub struct CliHost {
    pc: Value,
    symbols: FxHashMap<String, ValuePtr>,
    image: Vec<u8>,
}

impl CliHost {
    /// Build a host from parsed options and an already-loaded memory image.
    pub fn new(options: &Options, image: Vec<u8>) -> Self {
        let mut symbols = FxHashMap::default();
        for (name, value) in &options.vars {
            let value = *value;
            symbols.insert(name.clone(), ValuePtr::callback(move || value));
        }

        let registers = HostMemory::new(vec![0; options.regs.len() * REGISTER_SLOT]);
        for (slot, reg) in options.regs.iter().enumerate() {
            let offset = slot * REGISTER_SLOT;
            let stored = registers.write(offset, &reg.value.to_le_bytes());
            debug_assert!(stored, "register slot {slot} lies outside the register file");
            symbols.insert(
                reg.name.clone(),
                ValuePtr::memory(registers.at(offset), reg.width),
            );
        }

        tracing::debug!(symbols = symbols.len(), image = image.len(), "host ready");
        CliHost {
            pc: options.pc,
            symbols,
            image,
        }
    }

    /// `N` bytes starting at `address`; bytes outside the image read as 0.
    fn read<const N: usize>(&self, address: Value) -> [u8; N] {
        let mut bytes = [0; N];
        let Ok(start) = usize::try_from(address) else {
            return bytes;
        };
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = start
                .checked_add(i)
                .and_then(|at| self.image.get(at))
                .copied()
                .unwrap_or(0);
        }
        bytes
    }
}

impl Resolver for CliHost {
    fn resolve_function(&self, name: &str, arity: usize) -> Option<HostFunction> {
        builtin(name, arity)
    }

    fn resolve_variable(&self, name: &str) -> Option<ValuePtr> {
        self.symbols.get(name).cloned()
    }
}

impl Evaluator for CliHost {
    fn pc(&self) -> Value {
        self.pc
    }

    fn mem_byte(&self, address: Value) -> u8 {
        let [byte] = self.read::<1>(address);
        byte
    }

    fn mem_word(&self, address: Value) -> u16 {
        u16::from_le_bytes(self.read(address))
    }

    fn mem_dword(&self, address: Value) -> u32 {
        u32::from_le_bytes(self.read(address))
    }
}

/// Built-in functions, each with a single arity.
fn builtin(name: &str, arity: usize) -> Option<HostFunction> {
    let func = match name {
        "min" => HostFunction::binary(Value::min),
        "max" => HostFunction::binary(Value::max),
        "abs" => HostFunction::unary(Value::wrapping_abs),
        "lo" => HostFunction::unary(|v| v & 0xff),
        "hi" => HostFunction::unary(|v| (v >> 8) & 0xff),
        "bank" => HostFunction::unary(|v| (v >> 16) & 0xff),
        "clamp" => HostFunction::ternary(|v, lo, hi| v.max(lo).min(hi)),
        _ => return None,
    };
    (func.arity() == arity).then_some(func)
}
