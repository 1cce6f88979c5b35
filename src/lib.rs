//! Whilesem: denotational semantics for the While language
//!
//! Whilesem gives a program its classical mathematical meaning: a function
//! from input states to output states, built compositionally from the
//! meanings of its parts. The core is pure. States are persistent values,
//! expression evaluation is delegated to a pluggable evaluator, and
//! evaluator errors reach the caller unchanged.
//!
//! # Core Concepts
//!
//! - **State**: Persistent mapping from variables to values via [`State`]
//! - **Syntax**: The five-statement While language via [`Stm`]
//! - **Evaluators**: Pure expression evaluation via the [`Evaluator`] trait
//! - **Semantic function**: `S[stm]: State -> State` via [`semantic`] / [`execute`]
//! - **Runner**: Caller-side time budgets for programs that may not terminate
//! - **Snapshots**: JSON and binary persistence of states
//!
//! # Example
//!
//! ```rust
//! use whilesem::core::Value;
//! use whilesem::semantics::run;
//! use whilesem::state;
//! use whilesem::syntax::{assign, seq, while_loop, Aexp, Stm};
//!
//! // y := 1; while 1 < x do (y := y * x; x := x - 1)
//! let factorial: Stm = seq(
//!     assign("y", Aexp::num(1)),
//!     while_loop(
//!         Aexp::num(1).lt(Aexp::var("x")),
//!         seq(
//!             assign("y", Aexp::var("y") * Aexp::var("x")),
//!             assign("x", Aexp::var("x") - 1),
//!         ),
//!     ),
//! );
//!
//! let out = run(&factorial, state! { "x" => 5 }).unwrap();
//! assert_eq!(out.lookup("y").unwrap(), &Value::Int(120));
//! ```

pub mod core;
pub mod eval;
mod macros;
pub mod runner;
pub mod semantics;
pub mod snapshot;
pub mod syntax;

// Re-export commonly used types
pub use crate::core::{State, Value};
pub use eval::{EvalError, Evaluator, Standard};
pub use semantics::{execute, run, semantic};
pub use syntax::{Aexp, Bexp, Stm};
