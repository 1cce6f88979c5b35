//! Running programs under a caller-side time budget.
//!
//! The semantic function has no notion of a budget: a loop whose guard
//! never becomes false simply does not return. Callers that need an answer
//! in bounded time use a [`Runner`], which evaluates on a dedicated thread
//! and stops waiting once the budget is spent.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use whilesem::core::State;
//! use whilesem::eval::Standard;
//! use whilesem::runner::{Outcome, RunnerBuilder};
//! use whilesem::syntax::{skip, while_loop, Bexp, Stm};
//!
//! let runner = RunnerBuilder::new()
//!     .timeout(Duration::from_millis(50))
//!     .build()
//!     .unwrap();
//!
//! let spin: Stm = while_loop(Bexp::True, skip());
//! let outcome = runner.run(Arc::new(spin), Standard, State::new()).unwrap();
//!
//! assert!(matches!(outcome, Outcome::DidNotTerminate { .. }));
//! ```

mod builder;
mod outcome;

pub use builder::{RunnerBuilder, RunnerConfig, DEFAULT_TIMEOUT, MIN_STACK_SIZE};
pub use outcome::{ConfigViolation, Outcome, RunError};

use crate::core::State;
use crate::eval::Evaluator;
use crate::semantics::execute;
use crate::syntax::Stm;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use tracing::{debug, warn};

/// Evaluates programs on a worker thread under a time budget.
///
/// When the budget runs out the worker is abandoned, not interrupted: the
/// evaluator has no yield points. A diverging program keeps its thread
/// busy until the process exits.
#[derive(Clone, Debug, Default)]
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Build a runner from a configuration, validating it first.
    pub fn from_config(config: RunnerConfig) -> Result<Self, RunError> {
        RunnerBuilder::from_config(config).build()
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Evaluate `program` from `state`, waiting at most the configured timeout.
    #[tracing::instrument(level = "debug", skip_all, fields(thread = %self.config.thread_name))]
    pub fn run<A, B, E>(
        &self,
        program: Arc<Stm<A, B>>,
        evaluator: E,
        state: State,
    ) -> Result<Outcome<E::Error>, RunError>
    where
        A: Send + Sync + 'static,
        B: Send + Sync + 'static,
        E: Evaluator<A, B> + Send + 'static,
        E::Error: Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let mut worker = thread::Builder::new().name(self.config.thread_name.clone());
        if let Some(bytes) = self.config.stack_size {
            worker = worker.stack_size(bytes);
        }
        worker.spawn(move || {
            let result = execute(&*program, &evaluator, state);
            // The receiver is gone if the caller stopped waiting.
            let _ = tx.send(result);
        })?;
        debug!("evaluation started");

        let received = match self.config.timeout {
            Some(budget) => rx.recv_timeout(budget),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };

        match received {
            Ok(Ok(state)) => {
                debug!(bindings = state.len(), "program terminated");
                Ok(Outcome::Terminated(state))
            }
            Ok(Err(err)) => {
                debug!("expression evaluation failed");
                Ok(Outcome::Failed(err))
            }
            Err(RecvTimeoutError::Timeout) => {
                let budget = self.config.timeout.unwrap_or_default();
                warn!(?budget, "program did not terminate within budget");
                Ok(Outcome::DidNotTerminate { budget })
            }
            Err(RecvTimeoutError::Disconnected) => Err(RunError::Panicked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{EvalError, Standard};
    use crate::state;
    use crate::syntax::{assign, seq, skip, while_loop, Aexp, Bexp};
    use std::time::Duration;

    fn quick() -> Runner {
        RunnerBuilder::new()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap()
    }

    #[test]
    fn terminating_program_returns_final_state() {
        let program: Stm = seq(
            assign("i", Aexp::num(0)),
            while_loop(Aexp::var("i").lt(Aexp::num(3)), assign("i", Aexp::var("i") + 1)),
        );

        let outcome = Runner::default()
            .run(Arc::new(program), Standard, State::new())
            .unwrap();

        assert_eq!(outcome, Outcome::Terminated(state! { "i" => 3 }));
    }

    #[test]
    fn evaluator_errors_are_reported_as_failures() {
        let program: Stm = assign("x", Aexp::var("y") + 1);
        let outcome = Runner::default()
            .run(Arc::new(program), Standard, State::new())
            .unwrap();
        assert_eq!(outcome, Outcome::Failed(EvalError::unbound("y")));
    }

    #[test]
    fn diverging_program_exhausts_budget() {
        let program: Stm = while_loop(Bexp::True, skip());
        let outcome = quick().run(Arc::new(program), Standard, State::new()).unwrap();
        assert_eq!(
            outcome,
            Outcome::DidNotTerminate {
                budget: Duration::from_millis(100)
            }
        );
    }

    #[test]
    fn custom_stack_size_is_applied() {
        let runner = RunnerBuilder::new()
            .stack_size(MIN_STACK_SIZE * 16)
            .build()
            .unwrap();
        let program: Stm = assign("x", Aexp::num(1));
        let outcome = runner.run(Arc::new(program), Standard, State::new()).unwrap();
        assert!(outcome.is_terminated());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = RunnerConfig {
            thread_name: String::new(),
            ..RunnerConfig::default()
        };
        assert!(matches!(
            Runner::from_config(config),
            Err(RunError::InvalidConfig(_))
        ));
    }
}
