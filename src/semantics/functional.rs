//! State transformers and the combinators that build them.
//!
//! A transformer is the meaning of a statement: a function from an input
//! state to an output state, or to the error an expression evaluator
//! raised along the way. Transformers are pure; applying one never
//! changes the state it is given.

use crate::core::State;

/// Meaning of a statement, `State -> State`.
///
/// # Example
///
/// ```rust
/// use whilesem::core::{State, Value};
/// use whilesem::semantics::functional::{compose, identity, Transformer};
///
/// let set_ten: Transformer<'_, ()> = Box::new(|s: State| Ok(s.with("n", Value::Int(10))));
/// let bump: Transformer<'_, ()> = Box::new(|s: State| {
///     let n = s.get("n").and_then(Value::as_int).unwrap_or(0);
///     Ok(s.with("n", Value::Int(n + 1)))
/// });
///
/// // bump ∘ set_ten
/// let program = compose(bump, compose(set_ten, identity()));
/// let out = program(State::new()).unwrap();
/// assert_eq!(out.lookup("n").unwrap(), &Value::Int(11));
/// ```
pub type Transformer<'a, E> = Box<dyn Fn(State) -> Result<State, E> + 'a>;

/// The identity transformer: returns its input state unchanged.
pub fn identity<'a, E: 'a>() -> Transformer<'a, E> {
    Box::new(Ok)
}

/// Function composition, `f ∘ g`: apply `g`, then `f` to its result.
///
/// `f` only runs when `g` succeeds; an error from `g` is returned as is.
pub fn compose<'a, E: 'a>(f: Transformer<'a, E>, g: Transformer<'a, E>) -> Transformer<'a, E> {
    Box::new(move |state| f(g(state)?))
}

/// Conditional: apply `g1` where `p` holds, `g2` where it does not.
///
/// The predicate is evaluated once against the input state and exactly one
/// branch runs.
pub fn cond<'a, E, P>(p: P, g1: Transformer<'a, E>, g2: Transformer<'a, E>) -> Transformer<'a, E>
where
    E: 'a,
    P: Fn(&State) -> Result<bool, E> + 'a,
{
    Box::new(move |state| if p(&state)? { g1(state) } else { g2(state) })
}
