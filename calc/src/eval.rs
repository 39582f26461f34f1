use crate::{
    error::{Error, Result},
    syntax::{BinaryKind, Expr, UnaryKind},
};

impl UnaryKind {
    pub const fn apply(self, v: i32) -> i32 {
        match self {
            Self::Negate => v.wrapping_neg(),
        }
    }
}

impl BinaryKind {
    /// Overflow wraps. A zero divisor for `/` or `%` is the only failure.
    pub const fn apply(self, l: i32, r: i32) -> Result<i32> {
        match self {
            Self::Add => Ok(l.wrapping_add(r)),
            Self::Subtract => Ok(l.wrapping_sub(r)),
            Self::Multiply => Ok(l.wrapping_mul(r)),
            Self::Divide | Self::Modulo if r == 0 => Err(Error::DivideByZero),
            Self::Divide => Ok(l.wrapping_div(r)),
            Self::Modulo => Ok(l.wrapping_rem(r)),
        }
    }
}

impl Expr {
    pub fn eval(&self) -> Result<i32> {
        match self {
            Self::Literal(v) => Ok(*v),
            Self::UnaryOp(op, e) => Ok(op.apply(e.eval()?)),
            Self::BinaryOp(op, l, r) => {
                let l = l.eval()?;
                let r = r.eval()?;
                op.apply(l, r)
            }
        }
    }
}
