//! Blocking poll-until loop
//!
//! Repeatedly invokes a probe until a success predicate accepts its
//! result or a wall-clock deadline passes. Each attempt performs real
//! I/O in the caller's probe; the loop itself holds no state beyond the
//! deadline clock, so independent call sites may run concurrently.

use std::fmt;
use std::thread::sleep;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

/// How a probe error during a single attempt is treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Propagate the probe error immediately.
    FailFast,
    /// Record the error and keep retrying until the deadline. Needed
    /// when the probed service is expected to be intermittently
    /// unreachable, e.g. an engine that is still starting up.
    Tolerate,
}

/// Retry loop configuration.
#[derive(Clone, Debug)]
pub struct SyncConfig {
    /// Maximum wall-clock duration to keep retrying.
    pub timeout: Duration,

    /// Sleep between attempts.
    pub interval: Duration,

    /// Probe error handling.
    pub error_policy: ErrorPolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            interval: Duration::from_secs(3),
            error_policy: ErrorPolicy::Tolerate,
        }
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Run `exec` until `success` accepts its result.
    ///
    /// Returns the first accepted result. An attempt is always made
    /// immediately; a predicate that holds on the first attempt returns
    /// without sleeping. If the deadline passes with no accepted result
    /// the error carries the last observation for diagnostics.
    ///
    /// A probe that blocks indefinitely cannot be interrupted; the
    /// deadline is only checked between attempts.
    pub fn run<T, E, F, P>(&self, mut exec: F, success: P) -> Result<T, SyncError<T, E>>
    where
        T: fmt::Debug,
        E: fmt::Debug,
        F: FnMut() -> Result<T, E>,
        P: Fn(&T) -> bool,
    {
        let deadline = Deadline::start(self.timeout);
        let mut attempts = 0u32;
        let mut last_result = None;
        let mut last_error = None;

        loop {
            attempts += 1;
            match exec() {
                Ok(result) => {
                    if success(&result) {
                        debug!("condition met after {} attempts", attempts);
                        return Ok(result);
                    }
                    last_result = Some(result);
                }
                Err(err) => match self.error_policy {
                    ErrorPolicy::FailFast => return Err(SyncError::Probe(err)),
                    ErrorPolicy::Tolerate => {
                        debug!("probe failed, retrying: {:?}", err);
                        last_error = Some(err);
                    }
                },
            }

            if deadline.expired() {
                return Err(SyncError::Timeout {
                    timeout: self.timeout,
                    attempts,
                    last_result,
                    last_error,
                });
            }
            sleep(self.interval.min(deadline.remaining().max(Duration::from_millis(1))));
        }
    }
}

/// Run `exec` until `success` accepts its result, with default
/// configuration.
pub fn sync<T, E, F, P>(exec: F, success: P) -> Result<T, SyncError<T, E>>
where
    T: fmt::Debug,
    E: fmt::Debug,
    F: FnMut() -> Result<T, E>,
    P: Fn(&T) -> bool,
{
    SyncConfig::default().run(exec, success)
}

/// Wall-clock budget measured from a fixed start instant.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Start the clock now.
    pub fn start(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn expired(&self) -> bool {
        self.elapsed() >= self.budget
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.elapsed())
    }
}

/// Retry loop failure.
#[derive(Error, Debug)]
pub enum SyncError<T: fmt::Debug, E: fmt::Debug> {
    #[error(
        "condition not met within {timeout:?} ({attempts} attempts, \
         last result: {last_result:?}, last error: {last_error:?})"
    )]
    Timeout {
        timeout: Duration,
        attempts: u32,
        last_result: Option<T>,
        last_error: Option<E>,
    },

    #[error("probe failed: {0:?}")]
    Probe(E),
}

impl<T: fmt::Debug, E: fmt::Debug> SyncError<T, E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, SyncError::Timeout { .. })
    }
}
