//! Abstract syntax of the While language.
//!
//! Programs arrive here already parsed; turning source text into these
//! trees is the job of an external front end. All syntax types are
//! serde-serializable, so trees can also be exchanged as JSON.

mod expr;
mod stm;

pub use expr::{Aexp, Bexp};
pub use stm::{assign, cond, seq, skip, while_loop, Stm};
