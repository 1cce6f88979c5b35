//! Outcomes and errors of budgeted runs.

use crate::core::State;
use std::time::Duration;
use thiserror::Error;

/// How a budgeted run ended.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome<E> {
    /// The program terminated with this final state
    Terminated(State),

    /// An expression evaluator rejected an expression
    Failed(E),

    /// The program was still running when the budget ran out.
    ///
    /// This is not a semantic error: the program may diverge, or may just
    /// need more time than it was given.
    DidNotTerminate { budget: Duration },
}

impl<E> Outcome<E> {
    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated(_))
    }

    /// Final state, if the program terminated.
    pub fn state(&self) -> Option<&State> {
        match self {
            Self::Terminated(state) => Some(state),
            _ => None,
        }
    }

    /// Convert into a `Result`, treating an exhausted budget as `None`.
    pub fn into_result(self) -> Option<Result<State, E>> {
        match self {
            Self::Terminated(state) => Some(Ok(state)),
            Self::Failed(err) => Some(Err(err)),
            Self::DidNotTerminate { .. } => None,
        }
    }
}

/// Problems found in a runner configuration
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("Timeout must be greater than zero")]
    ZeroTimeout,

    #[error("Stack size {requested} is below the minimum of {minimum} bytes")]
    StackTooSmall { requested: usize, minimum: usize },

    #[error("Thread name must not be empty")]
    EmptyThreadName,
}

/// Errors from the runner itself, as opposed to the program it runs
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to spawn evaluation thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Evaluation thread panicked")]
    Panicked,

    #[error("Invalid runner configuration: {}", format_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),
}

fn format_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn terminated_exposes_state() {
        let state = State::new().update("x", Value::Int(1));
        let outcome: Outcome<String> = Outcome::Terminated(state.clone());

        assert!(outcome.is_terminated());
        assert_eq!(outcome.state(), Some(&state));
        assert_eq!(outcome.into_result(), Some(Ok(state)));
    }

    #[test]
    fn exhausted_budget_has_no_result() {
        let outcome: Outcome<String> = Outcome::DidNotTerminate {
            budget: Duration::from_millis(10),
        };

        assert!(!outcome.is_terminated());
        assert_eq!(outcome.state(), None);
        assert_eq!(outcome.into_result(), None);
    }

    #[test]
    fn failure_carries_the_evaluator_error() {
        let outcome = Outcome::Failed("boom".to_string());
        assert_eq!(outcome.into_result(), Some(Err("boom".to_string())));
    }

    #[test]
    fn invalid_config_lists_every_violation() {
        let err = RunError::InvalidConfig(vec![
            ConfigViolation::ZeroTimeout,
            ConfigViolation::EmptyThreadName,
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid runner configuration: Timeout must be greater than zero; \
             Thread name must not be empty"
        );
    }
}
