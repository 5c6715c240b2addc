//! Owned syntax tree produced by the parser.

use std::fmt;

use crate::{HostFunction, MemoryRef, Span, Value, ValueFn};

/// Expression node.
#[derive(Clone, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// Number of nodes in this tree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            match &expr.kind {
                ExprKind::Number(_) | ExprKind::ProgramCounter | ExprKind::Direct(_) => {}
                ExprKind::Memory { address, .. } => pending.push(address),
                ExprKind::Call { args, .. } => pending.extend(args.iter()),
                ExprKind::Unary { operand, .. } => pending.push(operand),
                ExprKind::Binary { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                }
                ExprKind::Conditional {
                    cond,
                    then_expr,
                    else_expr,
                } => {
                    pending.push(cond);
                    pending.push(then_expr);
                    pending.push(else_expr);
                }
            }
        }
        count
    }
}

/// Children are released iteratively so that dropping a tree nested tens
/// of thousands of levels deep does not recurse once per level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        take_children(&mut self.kind, &mut pending);
        while let Some(mut expr) = pending.pop() {
            take_children(&mut expr.kind, &mut pending);
        }
    }
}

fn take_children(kind: &mut ExprKind, out: &mut Vec<Expr>) {
    if matches!(
        kind,
        ExprKind::Number(_) | ExprKind::ProgramCounter | ExprKind::Direct(_)
    ) {
        return;
    }
    match std::mem::replace(kind, ExprKind::ProgramCounter) {
        ExprKind::Memory { address, .. } => out.push(*address),
        ExprKind::Call { args, .. } => out.extend(args.into_vec()),
        ExprKind::Unary { operand, .. } => out.push(*operand),
        ExprKind::Binary { left, right, .. } => {
            out.push(*left);
            out.push(*right);
        }
        ExprKind::Conditional {
            cond,
            then_expr,
            else_expr,
        } => {
            out.push(*cond);
            out.push(*then_expr);
            out.push(*else_expr);
        }
        ExprKind::Number(_) | ExprKind::ProgramCounter | ExprKind::Direct(_) => {}
    }
}

/// Expression variants.
#[derive(Clone, Debug)]
pub enum ExprKind {
    /// Constant value.
    Number(Value),
    /// Program counter supplied by the evaluation context (`$`).
    ProgramCounter,
    /// Memory read through the evaluation context: `[a]`, `w@[a]`.
    Memory { width: MemWidth, address: Box<Expr> },
    /// Resolved variable.
    Direct(DirectRead),
    /// Resolved host function applied to its arguments.
    Call {
        func: HostFunction,
        args: Box<[Expr]>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `cond ? then_expr : else_expr`
    Conditional {
        cond: Box<Expr>,
        then_expr: Box<Expr>,
        else_expr: Box<Expr>,
    },
}

/// How a resolved variable is read at evaluation time.
#[derive(Clone)]
pub enum DirectRead {
    /// Call the host callback.
    Callback(ValueFn),
    /// Read a little-endian integer from host memory.
    Memory {
        location: MemoryRef,
        width: DirectWidth,
    },
}

impl fmt::Debug for DirectRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectRead::Callback(_) => f.write_str("Callback"),
            DirectRead::Memory { location, width } => f
                .debug_struct("Memory")
                .field("offset", &location.offset)
                .field("width", width)
                .finish(),
        }
    }
}

/// Width of a memory-backed variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DirectWidth {
    Byte,
    Word,
    /// 24-bit, read as a word plus the following byte.
    Tribyte,
    Dword,
}

impl DirectWidth {
    /// Width for a variable of `size` bytes, if supported.
    pub fn from_size(size: usize) -> Option<Self> {
        match size {
            1 => Some(DirectWidth::Byte),
            2 => Some(DirectWidth::Word),
            3 => Some(DirectWidth::Tribyte),
            4 => Some(DirectWidth::Dword),
            _ => None,
        }
    }

    pub fn size(self) -> usize {
        match self {
            DirectWidth::Byte => 1,
            DirectWidth::Word => 2,
            DirectWidth::Tribyte => 3,
            DirectWidth::Dword => 4,
        }
    }
}

/// Width of a memory read expression.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MemWidth {
    Byte,
    Word,
    Dword,
}

impl MemWidth {
    /// Width for a data-type tag before `@`: `b`, `w` or `d`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "b" => Some(MemWidth::Byte),
            "w" => Some(MemWidth::Word),
            "d" => Some(MemWidth::Dword),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            MemWidth::Byte => "b",
            MemWidth::Word => "w",
            MemWidth::Dword => "d",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x`
    Not,
    /// `~x`
    BitNot,
}

impl UnaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    /// `||`
    Or,
    /// `&&`
    And,
    BitOr,
    BitXor,
    BitAnd,
    /// `=` or `==`
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Shl,
    /// Logical right shift.
    Shr,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

impl BinaryOp {
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::BitAnd => "&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

/// S-expression rendering, used by `hexpr parse`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Number(n) => write!(f, "{n:#x}"),
            ExprKind::ProgramCounter => f.write_str("$"),
            ExprKind::Memory { width, address } => write!(f, "({}@ {address})", width.tag()),
            ExprKind::Direct(DirectRead::Callback(_)) => f.write_str("<var>"),
            ExprKind::Direct(DirectRead::Memory { location, width }) => {
                write!(f, "<var+{}:{}>", location.offset, width.size())
            }
            ExprKind::Call { func, args } => {
                write!(f, "(call/{}", func.arity())?;
                for arg in args.iter() {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            ExprKind::Unary { op, operand } => write!(f, "({} {operand})", op.as_symbol()),
            ExprKind::Binary { op, left, right } => {
                write!(f, "({} {left} {right})", op.as_symbol())
            }
            ExprKind::Conditional {
                cond,
                then_expr,
                else_expr,
            } => write!(f, "(? {cond} {then_expr} {else_expr})"),
        }
    }
}
