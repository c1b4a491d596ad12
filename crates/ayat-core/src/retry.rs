//! Bounded, paced attempt loop.
//!
//! The daily fetcher needs "try up to N times, waiting a fixed delay after
//! every request" as an explicit, independently testable building block
//! rather than an ambient loop.

use std::future::Future;
use std::time::Duration;

/// Attempt bound and inter-attempt pacing for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts allowed before giving up.
    pub max_attempts: u32,

    /// Delay issued after every attempt, accepted or not.
    pub pause: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, pause: Duration) -> Self {
        Self {
            max_attempts,
            pause,
        }
    }

    async fn pace(&self) {
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
    }
}

/// Run `attempt` up to `policy.max_attempts` times, pacing after each try.
///
/// Every produced candidate is offered to `accept`; the first accepted one
/// is returned as `Ok(Some(_))`. A rejected candidate consumes the attempt.
/// Exhausting the bound yields `Ok(None)`. An attempt error aborts
/// immediately without pacing; the caller decides what failure means.
pub async fn paced_attempts<T, E, F, Fut, A>(
    policy: &RetryPolicy,
    mut attempt: F,
    mut accept: A,
) -> Result<Option<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    A: FnMut(&T) -> bool,
{
    for _ in 0..policy.max_attempts {
        let candidate = attempt().await?;
        let accepted = accept(&candidate);
        policy.pace().await;
        if accepted {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}
