//! Statements of the While language.

use super::expr::{Aexp, Bexp};
use crate::core::Ident;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A While-language statement.
///
/// The variant set is closed: every consumer matches on it exhaustively.
/// Compound statements own their children, so a program is a finite tree.
///
/// The expression types are parameters so that any [`Evaluator`] can be
/// plugged in; they default to the built-in [`Aexp`] and [`Bexp`].
///
/// [`Evaluator`]: crate::eval::Evaluator
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stm<A = Aexp, B = Bexp> {
    /// Identity transformation.
    Skip,
    /// Bind `name` to the value of `aexpr`.
    Ass { name: Ident, aexpr: A },
    /// Run `stm1`, then `stm2` on its result.
    Comp { stm1: Box<Stm<A, B>>, stm2: Box<Stm<A, B>> },
    /// Run `stm1` when `bexpr` holds, `stm2` otherwise.
    If {
        bexpr: B,
        stm1: Box<Stm<A, B>>,
        stm2: Box<Stm<A, B>>,
    },
    /// Repeat `stm` while `bexpr` holds.
    While { bexpr: B, stm: Box<Stm<A, B>> },
}

/// `skip`
pub fn skip<A, B>() -> Stm<A, B> {
    Stm::Skip
}

/// `name := aexpr`
pub fn assign<A, B>(name: impl Into<Ident>, aexpr: A) -> Stm<A, B> {
    Stm::Ass {
        name: name.into(),
        aexpr,
    }
}

/// `stm1; stm2`
pub fn seq<A, B>(stm1: Stm<A, B>, stm2: Stm<A, B>) -> Stm<A, B> {
    Stm::Comp {
        stm1: Box::new(stm1),
        stm2: Box::new(stm2),
    }
}

/// `if bexpr then stm1 else stm2`
pub fn cond<A, B>(bexpr: B, stm1: Stm<A, B>, stm2: Stm<A, B>) -> Stm<A, B> {
    Stm::If {
        bexpr,
        stm1: Box::new(stm1),
        stm2: Box::new(stm2),
    }
}

/// `while bexpr do stm`
pub fn while_loop<A, B>(bexpr: B, stm: Stm<A, B>) -> Stm<A, B> {
    Stm::While {
        bexpr,
        stm: Box::new(stm),
    }
}

impl<A, B> Stm<A, B> {
    /// Fold statements into a right-nested composition.
    ///
    /// An empty sequence is `skip`; a single statement is returned as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use whilesem::syntax::{assign, seq, Aexp, Stm};
    ///
    /// let block: Stm = Stm::block([
    ///     assign("x", Aexp::num(1)),
    ///     assign("y", Aexp::num(2)),
    ///     assign("z", Aexp::num(3)),
    /// ]);
    ///
    /// assert_eq!(
    ///     block,
    ///     seq(
    ///         assign("x", Aexp::num(1)),
    ///         seq(assign("y", Aexp::num(2)), assign("z", Aexp::num(3))),
    ///     )
    /// );
    /// ```
    pub fn block(stms: impl IntoIterator<Item = Stm<A, B>>) -> Self {
        let mut stms: Vec<_> = stms.into_iter().collect();
        let Some(mut acc) = stms.pop() else {
            return Stm::Skip;
        };
        while let Some(stm) = stms.pop() {
            acc = seq(stm, acc);
        }
        acc
    }

    /// Unfold a `while` one step: `if b then (S; while b do S) else skip`.
    ///
    /// Returns `None` for any other statement.
    pub fn unfold(&self) -> Option<Self>
    where
        A: Clone,
        B: Clone,
    {
        match self {
            Stm::While { bexpr, stm } => Some(cond(
                bexpr.clone(),
                seq((**stm).clone(), self.clone()),
                Stm::Skip,
            )),
            _ => None,
        }
    }

    /// Number of statement nodes in the tree.
    pub fn size(&self) -> usize {
        match self {
            Stm::Skip | Stm::Ass { .. } => 1,
            Stm::Comp { stm1, stm2 } | Stm::If { stm1, stm2, .. } => {
                1 + stm1.size() + stm2.size()
            }
            Stm::While { stm, .. } => 1 + stm.size(),
        }
    }

    fn is_compound(&self) -> bool {
        matches!(self, Stm::Comp { .. } | Stm::If { .. } | Stm::While { .. })
    }
}

struct Nested<'a, A, B>(&'a Stm<A, B>);

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Nested<'_, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_compound() {
            write!(f, "({})", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Stm<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stm::Skip => f.write_str("skip"),
            Stm::Ass { name, aexpr } => write!(f, "{name} := {aexpr}"),
            // Only the left side needs grouping: `;` associates to the right.
            Stm::Comp { stm1, stm2 } => write!(f, "{}; {stm2}", Nested(&**stm1)),
            Stm::If { bexpr, stm1, stm2 } => write!(
                f,
                "if {bexpr} then {} else {}",
                Nested(&**stm1),
                Nested(&**stm2)
            ),
            Stm::While { bexpr, stm } => write!(f, "while {bexpr} do {}", Nested(&**stm)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> Stm {
        seq(
            assign("i", Aexp::num(0)),
            while_loop(
                Aexp::var("i").lt(Aexp::num(3)),
                assign("i", Aexp::var("i") + 1),
            ),
        )
    }

    #[test]
    fn block_of_nothing_is_skip() {
        let block: Stm = Stm::block(Vec::new());
        assert_eq!(block, Stm::Skip);
    }

    #[test]
    fn block_of_one_is_that_statement() {
        let block: Stm = Stm::block([assign("x", Aexp::num(1))]);
        assert_eq!(block, assign("x", Aexp::num(1)));
    }

    #[test]
    fn unfold_only_applies_to_loops() {
        let body: Stm = assign("i", Aexp::var("i") + 1);
        let guard = Aexp::var("i").lt(Aexp::num(3));
        let lp = while_loop(guard.clone(), body.clone());

        assert_eq!(
            lp.unfold(),
            Some(cond(guard, seq(body, lp.clone()), Stm::Skip))
        );
        assert_eq!(Stm::<Aexp, Bexp>::Skip.unfold(), None);
    }

    #[test]
    fn size_counts_statement_nodes() {
        assert_eq!(counter().size(), 4);
        assert_eq!(Stm::<Aexp, Bexp>::Skip.size(), 1);
    }

    #[test]
    fn display_renders_concrete_syntax() {
        assert_eq!(
            counter().to_string(),
            "i := 0; while i < 3 do i := i + 1"
        );

        let branch: Stm = cond(
            Bexp::var("flag"),
            seq(assign("x", Aexp::num(1)), Stm::Skip),
            Stm::Skip,
        );
        assert_eq!(branch.to_string(), "if flag then (x := 1; skip) else skip");
    }

    #[test]
    fn display_groups_left_nested_composition() {
        let program: Stm = seq(
            seq(assign("a", Aexp::num(1)), assign("b", Aexp::num(2))),
            Stm::Skip,
        );
        assert_eq!(program.to_string(), "(a := 1; b := 2); skip");
    }

    #[test]
    fn statements_round_trip_through_json() {
        let program = counter();
        let json = serde_json::to_string(&program).unwrap();
        let parsed: Stm = serde_json::from_str(&json).unwrap();
        assert_eq!(program, parsed);
    }
}
