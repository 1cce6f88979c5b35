//! The semantic function of the While language.
//!
//! The meaning of a statement is a state transformer, defined by cases on
//! the statement and built from the meanings of its substatements:
//!
//! - `S[skip] = id`
//! - `S[x := a] s = s[x ↦ A[a] s]`
//! - `S[S1; S2] = S[S2] ∘ S[S1]`
//! - `S[if b then S1 else S2] = cond(B[b], S[S1], S[S2])`
//! - `S[while b do S] = FIX F` where `F g = cond(B[b], g ∘ S[S], id)`
//!
//! The fixed point is computed by iteration: test the guard, run the body,
//! repeat. A loop whose guard never becomes false does not return. No
//! iteration bound is imposed here; see [`crate::runner`] for running
//! programs under a caller-side time budget.
//!
//! Two equivalent entry points are provided. [`semantic`] builds the
//! transformer compositionally and returns it; [`execute`] is the direct
//! two-argument form `S[stm](state)`.

pub mod functional;

use crate::core::{State, Value};
use crate::eval::{EvalError, Evaluator, Standard};
use crate::syntax::Stm;
use functional::{compose, cond, identity, Transformer};
use tracing::trace;

/// Build the state transformer denoted by `stm`.
///
/// The transformer borrows the statement and the evaluator and can be
/// applied to any number of states.
///
/// # Example
///
/// ```rust
/// use whilesem::core::{State, Value};
/// use whilesem::eval::Standard;
/// use whilesem::semantics::semantic;
/// use whilesem::syntax::{assign, Aexp, Stm};
///
/// let program: Stm = assign("x", Aexp::var("x") + 1);
/// let meaning = semantic(&program, &Standard);
///
/// let out = meaning(State::new().update("x", Value::Int(5))).unwrap();
/// assert_eq!(out.lookup("x").unwrap(), &Value::Int(6));
/// ```
pub fn semantic<'a, A, B, E>(stm: &'a Stm<A, B>, evaluator: &'a E) -> Transformer<'a, E::Error>
where
    A: 'a,
    B: 'a,
    E: Evaluator<A, B> + ?Sized + 'a,
    E::Error: 'a,
{
    match stm {
        Stm::Skip => identity(),
        Stm::Ass { name, aexpr } => Box::new(move |state: State| -> Result<State, E::Error> {
            let value = evaluator.arith(aexpr, &state)?;
            Ok(state.with(name.clone(), Value::Int(value)))
        }),
        Stm::Comp { stm1, stm2 } => compose(semantic(stm2, evaluator), semantic(stm1, evaluator)),
        Stm::If { bexpr, stm1, stm2 } => cond(
            move |state: &State| evaluator.boolean(bexpr, state),
            semantic(stm1, evaluator),
            semantic(stm2, evaluator),
        ),
        Stm::While { bexpr, stm } => {
            let body = semantic(stm, evaluator);
            Box::new(move |mut state: State| -> Result<State, E::Error> {
                while evaluator.boolean(bexpr, &state)? {
                    state = body(state)?;
                }
                Ok(state)
            })
        }
    }
}

/// Apply the meaning of `stm` to `state`.
///
/// Equivalent to `semantic(stm, evaluator)(state)` without building the
/// intermediate closures. Evaluator errors are returned exactly as the
/// evaluator raised them.
///
/// # Example
///
/// ```rust
/// use whilesem::core::{State, Value};
/// use whilesem::eval::Standard;
/// use whilesem::semantics::execute;
/// use whilesem::syntax::{assign, seq, while_loop, Aexp, Stm};
///
/// // i := 0; while i < 3 do i := i + 1
/// let program: Stm = seq(
///     assign("i", Aexp::num(0)),
///     while_loop(Aexp::var("i").lt(Aexp::num(3)), assign("i", Aexp::var("i") + 1)),
/// );
///
/// let out = execute(&program, &Standard, State::new()).unwrap();
/// assert_eq!(out.lookup("i").unwrap(), &Value::Int(3));
/// ```
pub fn execute<A, B, E>(stm: &Stm<A, B>, evaluator: &E, state: State) -> Result<State, E::Error>
where
    E: Evaluator<A, B> + ?Sized,
{
    match stm {
        Stm::Skip => Ok(state),
        Stm::Ass { name, aexpr } => {
            // The right-hand side sees the state before the assignment.
            let value = evaluator.arith(aexpr, &state)?;
            Ok(state.with(name.clone(), Value::Int(value)))
        }
        Stm::Comp { stm1, stm2 } => {
            let intermediate = execute(stm1, evaluator, state)?;
            execute(stm2, evaluator, intermediate)
        }
        Stm::If { bexpr, stm1, stm2 } => {
            if evaluator.boolean(bexpr, &state)? {
                execute(stm1, evaluator, state)
            } else {
                execute(stm2, evaluator, state)
            }
        }
        // Iterative on purpose: stack depth must not grow with the iteration count.
        Stm::While { bexpr, stm } => {
            let mut state = state;
            let mut iterations: u64 = 0;
            while evaluator.boolean(bexpr, &state)? {
                state = execute(stm, evaluator, state)?;
                iterations += 1;
            }
            trace!(iterations, "loop guard no longer holds");
            Ok(state)
        }
    }
}

/// Run a program with the [`Standard`] expression evaluator.
#[tracing::instrument(level = "debug", skip_all, fields(size = stm.size()))]
pub fn run(stm: &Stm, state: State) -> Result<State, EvalError> {
    execute(stm, &Standard, state)
}
