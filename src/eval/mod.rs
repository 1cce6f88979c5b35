//! Expression evaluators.
//!
//! The semantic function never looks inside expressions. It hands them,
//! together with the current state, to an [`Evaluator`] and uses whatever
//! comes back. Evaluators must be pure: the same expression and state
//! always give the same answer, with no hidden counters feeding back into
//! results.

mod error;
mod standard;

pub use error::EvalError;
pub use standard::{eval_arith, eval_bool, Standard};

use crate::core::State;
use crate::syntax::{Aexp, Bexp};

/// Evaluates the arithmetic and boolean expressions of a program.
///
/// Errors are the evaluator's own; the semantic function passes them to
/// its caller untouched.
///
/// # Example
///
/// ```rust
/// use whilesem::core::{State, Value};
/// use whilesem::eval::{Evaluator, Standard};
/// use whilesem::syntax::Aexp;
///
/// let state = State::new().update("x", Value::Int(5));
/// let value = Standard.arith(&(Aexp::var("x") + 1), &state).unwrap();
/// assert_eq!(value, 6);
/// ```
pub trait Evaluator<A = Aexp, B = Bexp> {
    type Error;

    /// Evaluate an arithmetic expression to an integer.
    fn arith(&self, expr: &A, state: &State) -> Result<i64, Self::Error>;

    /// Evaluate a boolean expression to a truth value.
    fn boolean(&self, expr: &B, state: &State) -> Result<bool, Self::Error>;
}

impl<A, B, E> Evaluator<A, B> for &E
where
    E: Evaluator<A, B> + ?Sized,
{
    type Error = E::Error;

    fn arith(&self, expr: &A, state: &State) -> Result<i64, Self::Error> {
        (**self).arith(expr, state)
    }

    fn boolean(&self, expr: &B, state: &State) -> Result<bool, Self::Error> {
        (**self).boolean(expr, state)
    }
}
