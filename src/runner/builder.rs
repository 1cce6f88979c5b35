//! Runner configuration and its builder.

use super::outcome::{ConfigViolation, RunError};
use super::Runner;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Default time budget for a run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Smallest stack the evaluation thread may be given.
pub const MIN_STACK_SIZE: usize = 64 * 1024;

/// Runner settings, loadable from any serde format.
///
/// Missing fields take their defaults, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Time budget; `None` waits for as long as the program runs
    pub timeout: Option<Duration>,
    /// Stack size of the evaluation thread; `None` uses the platform default
    pub stack_size: Option<usize>,
    /// Name given to the evaluation thread
    pub thread_name: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
            stack_size: None,
            thread_name: "whilesem-eval".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Check the configuration, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        if let Some(timeout) = self.timeout {
            checks.push(if timeout.is_zero() {
                Validation::fail(ConfigViolation::ZeroTimeout)
            } else {
                Validation::success(())
            });
        }

        if let Some(requested) = self.stack_size {
            checks.push(if requested < MIN_STACK_SIZE {
                Validation::fail(ConfigViolation::StackTooSmall {
                    requested,
                    minimum: MIN_STACK_SIZE,
                })
            } else {
                Validation::success(())
            });
        }

        checks.push(if self.thread_name.trim().is_empty() {
            Validation::fail(ConfigViolation::EmptyThreadName)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Builder for [`Runner`]
pub struct RunnerBuilder {
    config: RunnerConfig,
}

impl RunnerBuilder {
    pub fn new() -> Self {
        Self {
            config: RunnerConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Set the time budget
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.config.timeout = Some(duration);
        self
    }

    /// Wait without a time budget
    pub fn no_timeout(mut self) -> Self {
        self.config.timeout = None;
        self
    }

    /// Set the evaluation thread's stack size in bytes
    pub fn stack_size(mut self, bytes: usize) -> Self {
        self.config.stack_size = Some(bytes);
        self
    }

    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.thread_name = name.into();
        self
    }

    /// Validate the configuration and build the runner
    pub fn build(self) -> Result<Runner, RunError> {
        match self.config.validate() {
            Validation::Success(_) => Ok(Runner {
                config: self.config,
            }),
            Validation::Failure(violations) => Err(RunError::InvalidConfig(
                violations.iter().cloned().collect(),
            )),
        }
    }
}

impl Default for RunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
