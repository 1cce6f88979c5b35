//! The built-in evaluator for [`Aexp`] and [`Bexp`].
//!
//! Evaluation is strict: both operands of a binary operator are evaluated,
//! left first, before the operator is applied. Integer arithmetic is
//! checked and reports overflow instead of wrapping.

use super::error::EvalError;
use super::Evaluator;
use crate::core::{State, Value};
use crate::syntax::{Aexp, Bexp};

/// Standard evaluator for the built-in expression language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standard;

impl Evaluator for Standard {
    type Error = EvalError;

    fn arith(&self, expr: &Aexp, state: &State) -> Result<i64, EvalError> {
        eval_arith(expr, state)
    }

    fn boolean(&self, expr: &Bexp, state: &State) -> Result<bool, EvalError> {
        eval_bool(expr, state)
    }
}

/// Evaluate an arithmetic expression against `state`.
pub fn eval_arith(expr: &Aexp, state: &State) -> Result<i64, EvalError> {
    match expr {
        Aexp::Num(n) => Ok(*n),
        Aexp::Var(x) => match state.lookup(x)? {
            Value::Int(n) => Ok(*n),
            found @ Value::Bool(_) => Err(mismatch(x, "integer", found)),
        },
        Aexp::Add(a, b) => {
            let (a, b) = (eval_arith(a, state)?, eval_arith(b, state)?);
            a.checked_add(b).ok_or(EvalError::Overflow { op: "addition" })
        }
        Aexp::Sub(a, b) => {
            let (a, b) = (eval_arith(a, state)?, eval_arith(b, state)?);
            a.checked_sub(b)
                .ok_or(EvalError::Overflow { op: "subtraction" })
        }
        Aexp::Mul(a, b) => {
            let (a, b) = (eval_arith(a, state)?, eval_arith(b, state)?);
            a.checked_mul(b)
                .ok_or(EvalError::Overflow { op: "multiplication" })
        }
    }
}

/// Evaluate a boolean expression against `state`.
pub fn eval_bool(expr: &Bexp, state: &State) -> Result<bool, EvalError> {
    match expr {
        Bexp::True => Ok(true),
        Bexp::False => Ok(false),
        Bexp::Var(x) => match state.lookup(x)? {
            Value::Bool(b) => Ok(*b),
            found @ Value::Int(_) => Err(mismatch(x, "boolean", found)),
        },
        Bexp::Eq(a, b) => Ok(eval_arith(a, state)? == eval_arith(b, state)?),
        Bexp::Le(a, b) => Ok(eval_arith(a, state)? <= eval_arith(b, state)?),
        Bexp::Lt(a, b) => Ok(eval_arith(a, state)? < eval_arith(b, state)?),
        Bexp::Not(b) => Ok(!eval_bool(b, state)?),
        Bexp::And(a, b) => {
            let (a, b) = (eval_bool(a, state)?, eval_bool(b, state)?);
            Ok(a && b)
        }
        Bexp::Or(a, b) => {
            let (a, b) = (eval_bool(a, state)?, eval_bool(b, state)?);
            Ok(a || b)
        }
    }
}

fn mismatch(name: &str, expected: &'static str, found: &Value) -> EvalError {
    EvalError::TypeMismatch {
        name: name.to_string(),
        expected,
        found: found.type_name(),
    }
}
