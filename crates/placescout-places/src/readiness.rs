//! Fixed-interval polling for continuation tokens that are not servable yet.
//!
//! A freshly issued page token is rejected for a few seconds until it
//! propagates on the provider side. [`poll_until_settled`] repeats the same
//! request, strictly one attempt at a time, until the outcome is definitive
//! or the attempt budget runs out. Exhausting the budget is not an error: the
//! last outcome is returned as-is.

use std::future::Future;
use std::time::Duration;

/// Attempt budget and spacing for continuation-token requests.
///
/// The default is 6 attempts, 1 second apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    max_attempts: u32,
    interval: Duration,
}

impl ReadinessPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    /// `max_attempts` is clamped to at least 1.
    #[must_use]
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            interval,
        }
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_INTERVAL)
    }
}

/// Runs `operation` until `is_settled` accepts its outcome or
/// `policy.max_attempts()` attempts have been made, sleeping
/// `policy.interval()` between attempts (never after the last one).
///
/// | Attempt | Sleep before next attempt |
/// |---------|---------------------------|
/// | 1 .. n-1 | `interval` if unsettled |
/// | n | none; outcome returned |
pub(crate) async fn poll_until_settled<T, F, Fut, S>(
    policy: ReadinessPolicy,
    mut operation: F,
    is_settled: S,
) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = T>,
    S: Fn(&T) -> bool,
{
    let max_attempts = policy.max_attempts();
    let mut attempt = 1u32;

    loop {
        let outcome = operation().await;
        if is_settled(&outcome) {
            if attempt > 1 {
                tracing::debug!(attempt, "continuation token became servable");
            }
            return outcome;
        }
        if attempt >= max_attempts {
            tracing::warn!(
                attempts = attempt,
                "continuation token never settled; proceeding with last response"
            );
            return outcome;
        }

        tracing::warn!(
            attempt,
            max_attempts,
            interval = ?policy.interval(),
            "continuation token not ready, waiting before next attempt"
        );
        tokio::time::sleep(policy.interval()).await;
        attempt += 1;
    }
}
