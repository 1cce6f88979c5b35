//! Expression evaluation errors.

use crate::core::{Ident, UnboundVariable};
use thiserror::Error;

/// Errors raised by the standard expression evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An expression read a variable the state does not bind
    #[error(transparent)]
    Unbound(#[from] UnboundVariable),

    /// A variable holds a value from the wrong domain for its use
    #[error("Variable '{name}' holds a {found}, expected a {expected}")]
    TypeMismatch {
        name: Ident,
        expected: &'static str,
        found: &'static str,
    },

    /// Checked integer arithmetic overflowed
    #[error("Integer overflow in {op}")]
    Overflow { op: &'static str },
}

impl EvalError {
    pub fn unbound(name: impl Into<Ident>) -> Self {
        Self::Unbound(UnboundVariable { name: name.into() })
    }
}
