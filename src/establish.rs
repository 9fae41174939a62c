//! Connection establishment with a bounded, fixed-delay retry loop.
//!
//! The loop is deliberately simple: a bounded wait for a dependent service
//! to start, not a resilience pattern. Backoff is a fixed delay, and a
//! failure to open the transport counts the same as a failed probe — each
//! consumes one attempt.

use std::future::Future;
use std::io::Write;
use std::time::Duration;

use crate::error::{Error, Result};

/// Retry budget for connection establishment.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of connect+probe attempts.
    pub max_attempts: u32,
    /// Fixed wait between attempts.
    pub delay: Duration,
    /// Per-attempt probe timeout.
    pub probe_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            delay: Duration::from_secs(3),
            probe_timeout: Duration::from_secs(2),
        }
    }
}

/// Attempt counter for one establishment run.
///
/// Created when establishment starts, advanced on every attempt, discarded
/// on success or exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryState {
    attempt: u32,
    max_attempts: u32,
}

impl RetryState {
    pub fn new(policy: &RetryPolicy) -> Self {
        Self {
            attempt: 0,
            max_attempts: policy.max_attempts,
        }
    }

    /// Begin the next attempt, returning its 1-based number, or `None` once
    /// the budget is spent.
    pub fn next_attempt(&mut self) -> Option<u32> {
        if self.attempt >= self.max_attempts {
            return None;
        }
        self.attempt += 1;
        Some(self.attempt)
    }

    /// Attempts begun so far.
    pub fn attempts(&self) -> u32 {
        self.attempt
    }
}

/// One connect-and-probe attempt against an agent.
///
/// The production implementation is [`AgentProbe`](crate::probe::AgentProbe);
/// tests substitute scripted outcomes.
pub trait Probe {
    /// Live connection handle produced on success.
    type Handle;

    /// Open the transport and issue the verification probe.
    fn attempt(&mut self) -> impl Future<Output = Result<Self::Handle>>;
}

/// A verified connection plus how many attempts it took.
#[derive(Debug)]
pub struct Established<H> {
    pub handle: H,
    pub attempts: u32,
}

/// Run the retry loop until the probe succeeds or the budget is spent.
///
/// Every attempt's outcome is written to `progress` before the next attempt
/// starts. The inter-attempt wait is `tokio::time::sleep`, so tests under
/// paused time run the whole budget without real delay.
pub async fn establish<P, W>(
    probe: &mut P,
    policy: &RetryPolicy,
    progress: &mut W,
) -> Result<Established<P::Handle>>
where
    P: Probe,
    W: Write,
{
    let mut state = RetryState::new(policy);
    let mut last_err: Option<Error> = None;

    while let Some(attempt) = state.next_attempt() {
        match probe.attempt().await {
            Ok(handle) => {
                writeln!(
                    progress,
                    "agent responding (attempt {}/{})",
                    attempt, policy.max_attempts
                )?;
                tracing::info!(attempt, "connection verified");
                return Ok(Established { handle, attempts: attempt });
            }
            Err(err) => {
                writeln!(
                    progress,
                    "waiting for agent... (attempt {}/{}): {}",
                    attempt, policy.max_attempts, err
                )?;
                tracing::debug!(attempt, error = %err, "probe attempt failed");
                last_err = Some(err);
                tokio::time::sleep(policy.delay).await;
            }
        }
    }

    let last = last_err.unwrap_or_else(|| {
        Error::Io(std::io::Error::other("no attempts permitted by retry policy"))
    });
    Err(Error::Exhausted {
        attempts: state.attempts(),
        last: Box::new(last),
    })
}
