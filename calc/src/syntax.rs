use std::fmt::{self, Display, Formatter};
use util::Constructors;

pub const PROMPT: &str = ">>> ";
pub const KEYWORDS: &[&str] = &["quit", "exit"];
pub const COMMANDS: &[&str] = &["ast", "eval"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryKind {
    Negate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

#[derive(Clone, Debug, PartialEq, Eq, Constructors)]
pub enum Expr {
    Literal(i32),
    UnaryOp(UnaryKind, #[ctor(name = "operand", into)] Box<Self>),
    BinaryOp(
        BinaryKind,
        #[ctor(name = "left", into)] Box<Self>,
        #[ctor(name = "right", into)] Box<Self>,
    ),
}

impl UnaryKind {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Negate),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Negate => '-',
        }
    }
}

impl BinaryKind {
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }
}

impl Display for UnaryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Display for BinaryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Expr {
    fn fmt_atom(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(n) => write!(f, "{n}"),
            Self::UnaryOp(op, e) => {
                write!(f, "{op}")?;
                e.fmt_atom(f)
            }
            e => write!(f, "({e})"),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryOp(op, left, right) => {
                write!(f, "{left} {op} ")?;
                right.fmt_atom(f)
            }
            e => e.fmt_atom(f),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Eval(Expr),
    Ast(Expr),
    Quit,
    Noop,
}
