//! Tree-walking interpreter.

use hexpr_diagnostic::{ExprError, ExprErrorKind};
use hexpr_ir::{
    BinaryOp, DirectRead, Expr, ExprKind, HostFunction, MemWidth, Span, Value, MAX_FUNC_ARGS,
};
use hexpr_stack::ensure_sufficient_stack;

use crate::{evaluate_binary, evaluate_unary, Evaluator};

/// Walks a tree against one evaluation context.
///
/// Holds no state besides the context, so one interpreter can evaluate any
/// number of trees.
pub struct Interpreter<'a> {
    context: &'a dyn Evaluator,
}

impl<'a> Interpreter<'a> {
    pub fn new(context: &'a dyn Evaluator) -> Self {
        Interpreter { context }
    }

    /// Evaluate `expr`, growing the stack for deeply nested trees.
    pub fn eval(&self, expr: &Expr) -> Result<Value, ExprError> {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&self, expr: &Expr) -> Result<Value, ExprError> {
        match &expr.kind {
            ExprKind::Number(n) => Ok(*n),
            ExprKind::ProgramCounter => Ok(self.context.pc()),
            ExprKind::Memory { width, address } => {
                let address = self.eval(address)?;
                Ok(self.read_memory(*width, address))
            }
            ExprKind::Direct(read) => read_direct(read, expr.span),
            ExprKind::Call { func, args } => self.eval_call(func, args, expr.span),
            ExprKind::Unary { op, operand } => Ok(evaluate_unary(self.eval(operand)?, *op)),
            ExprKind::Binary { op, left, right } => self.eval_binary(*op, left, right, expr.span),
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => {
                if self.eval(cond)? == 0 {
                    self.eval(else_expr)
                } else {
                    self.eval(then_expr)
                }
            }
        }
    }

    fn eval_binary(
        &self,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
        span: Span,
    ) -> Result<Value, ExprError> {
        match op {
            BinaryOp::And => {
                if self.eval(left)? == 0 {
                    return Ok(0);
                }
                Ok(Value::from(self.eval(right)? != 0))
            }
            BinaryOp::Or => {
                if self.eval(left)? != 0 {
                    return Ok(1);
                }
                Ok(Value::from(self.eval(right)? != 0))
            }
            _ => {
                let a = self.eval(left)?;
                let b = self.eval(right)?;
                evaluate_binary(a, b, op).map_err(|kind| ExprError::new(kind, span))
            }
        }
    }

    fn eval_call(
        &self,
        func: &HostFunction,
        args: &[Expr],
        span: Span,
    ) -> Result<Value, ExprError> {
        let mut values: [Value; MAX_FUNC_ARGS] = [0; MAX_FUNC_ARGS];
        for (slot, arg) in values.iter_mut().zip(args) {
            *slot = self.eval(arg)?;
        }
        let result = values
            .get(..args.len())
            .and_then(|values| func.call(values))
            .ok_or_else(|| ExprError::new(ExprErrorKind::Internal, span))?;
        tracing::trace!(arity = func.arity(), result, "host call");
        Ok(result)
    }

    fn read_memory(&self, width: MemWidth, address: Value) -> Value {
        let value = match width {
            MemWidth::Byte => Value::from(self.context.mem_byte(address)),
            MemWidth::Word => Value::from(self.context.mem_word(address)),
            MemWidth::Dword => self.context.mem_dword(address).cast_signed(),
        };
        tracing::trace!(width = width.tag(), address, value, "memory read");
        value
    }
}

/// Read a resolved variable. The 24-bit width is the little-endian word at
/// the location with the next byte above it.
fn read_direct(read: &DirectRead, span: Span) -> Result<Value, ExprError> {
    match read {
        DirectRead::Callback(f) => Ok(f()),
        DirectRead::Memory { location, width } => {
            let value = location
                .read(width.size())
                .ok_or_else(|| ExprError::new(ExprErrorKind::Internal, span))?;
            tracing::trace!(
                offset = location.offset,
                size = width.size(),
                value,
                "variable read"
            );
            Ok(value.cast_signed())
        }
    }
}
