//! Core value types of the evaluator.
//!
//! This module contains the pure data the semantic function works over:
//! - Values bound to variables
//! - The persistent `State` mapping variables to values
//!
//! Nothing in here performs I/O or mutates shared data.

mod state;
mod value;

pub use state::{State, UnboundVariable};
pub use value::{is_identifier, Ident, Value};
