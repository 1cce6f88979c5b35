//! Arithmetic and boolean expressions.

use crate::core::Ident;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops;

/// Arithmetic expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Aexp {
    Num(i64),
    Var(Ident),
    Add(Box<Aexp>, Box<Aexp>),
    Sub(Box<Aexp>, Box<Aexp>),
    Mul(Box<Aexp>, Box<Aexp>),
}

/// Boolean expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bexp {
    True,
    False,
    /// Read a variable bound to a truth value.
    Var(Ident),
    Eq(Aexp, Aexp),
    Le(Aexp, Aexp),
    Lt(Aexp, Aexp),
    Not(Box<Bexp>),
    And(Box<Bexp>, Box<Bexp>),
    Or(Box<Bexp>, Box<Bexp>),
}

impl Aexp {
    pub fn num(n: i64) -> Self {
        Self::Num(n)
    }

    pub fn var(name: impl Into<Ident>) -> Self {
        Self::Var(name.into())
    }

    pub fn equals(self, rhs: Aexp) -> Bexp {
        Bexp::Eq(self, rhs)
    }

    pub fn le(self, rhs: Aexp) -> Bexp {
        Bexp::Le(self, rhs)
    }

    pub fn lt(self, rhs: Aexp) -> Bexp {
        Bexp::Lt(self, rhs)
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Self::Num(_) | Self::Var(_))
    }
}

impl Bexp {
    pub fn var(name: impl Into<Ident>) -> Self {
        Self::Var(name.into())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        Self::Not(Box::new(self))
    }

    pub fn and(self, rhs: Bexp) -> Self {
        Self::And(Box::new(self), Box::new(rhs))
    }

    pub fn or(self, rhs: Bexp) -> Self {
        Self::Or(Box::new(self), Box::new(rhs))
    }

    fn is_atomic(&self) -> bool {
        matches!(self, Self::True | Self::False | Self::Var(_) | Self::Not(_))
    }
}

impl From<i64> for Aexp {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<bool> for Bexp {
    fn from(b: bool) -> Self {
        if b {
            Self::True
        } else {
            Self::False
        }
    }
}

macro_rules! arith_op {
    ($trait:ident, $method:ident, $variant:ident) => {
        impl ops::$trait for Aexp {
            type Output = Aexp;

            fn $method(self, rhs: Aexp) -> Aexp {
                Aexp::$variant(Box::new(self), Box::new(rhs))
            }
        }

        impl ops::$trait<i64> for Aexp {
            type Output = Aexp;

            fn $method(self, rhs: i64) -> Aexp {
                Aexp::$variant(Box::new(self), Box::new(Aexp::Num(rhs)))
            }
        }
    };
}

arith_op!(Add, add, Add);
arith_op!(Sub, sub, Sub);
arith_op!(Mul, mul, Mul);

struct Operand<'a, T>(&'a T, bool);

impl<T: fmt::Display> fmt::Display for Operand<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.1 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

fn arith(a: &Aexp) -> Operand<'_, Aexp> {
    Operand(a, a.is_atomic())
}

fn boolean(b: &Bexp) -> Operand<'_, Bexp> {
    Operand(b, b.is_atomic())
}

impl fmt::Display for Aexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Var(x) => write!(f, "{x}"),
            Self::Add(a, b) => write!(f, "{} + {}", arith(a), arith(b)),
            Self::Sub(a, b) => write!(f, "{} - {}", arith(a), arith(b)),
            Self::Mul(a, b) => write!(f, "{} * {}", arith(a), arith(b)),
        }
    }
}

impl fmt::Display for Bexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("true"),
            Self::False => f.write_str("false"),
            Self::Var(x) => write!(f, "{x}"),
            Self::Eq(a, b) => write!(f, "{} = {}", arith(a), arith(b)),
            Self::Le(a, b) => write!(f, "{} <= {}", arith(a), arith(b)),
            Self::Lt(a, b) => write!(f, "{} < {}", arith(a), arith(b)),
            Self::Not(b) => write!(f, "!{}", boolean(b)),
            Self::And(a, b) => write!(f, "{} && {}", boolean(a), boolean(b)),
            Self::Or(a, b) => write!(f, "{} || {}", boolean(a), boolean(b)),
        }
    }
}
