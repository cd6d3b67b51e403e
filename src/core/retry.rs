//! Bounded retry with fixed backoff for remote queries.

use crate::error::{NbaError, Result};
use std::future::Future;
use std::time::Duration;

/// How often a failed remote query is reattempted and how long to wait
/// between attempts.
///
/// The backoff is injected rather than hard-coded so tests can run the
/// retry loop with `Duration::ZERO`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,
    /// Fixed sleep between consecutive attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Policy with no sleep between attempts, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Duration::ZERO,
        }
    }
}

/// Run `op` up to `policy.max_attempts` times, sleeping `policy.backoff`
/// between attempts.
///
/// Every failed attempt logs a warning with its attempt count. Exhausting
/// the attempts returns [`NbaError::FetchExhausted`] carrying the last
/// underlying cause and the query description, which is fatal to the run.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, what: &str, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_err = None;
    for attempt in 1..=policy.max_attempts {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => {
                eprintln!(
                    "⚠ Retry ({}/{}) fetching {}... {}",
                    attempt, policy.max_attempts, what, e
                );
                last_err = Some(e);
                if attempt < policy.max_attempts {
                    tokio::time::sleep(policy.backoff).await;
                }
            }
        }
    }

    Err(NbaError::FetchExhausted {
        query: what.to_string(),
        attempts: policy.max_attempts,
        source: Box::new(last_err.unwrap_or(NbaError::NoData)),
    })
}
