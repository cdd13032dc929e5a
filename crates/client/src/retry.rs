//! Opt-in retry around the normalizing request function.
//!
//! Only transient failures (timeout, no connection) are retried, with
//! exponential backoff between attempts. Any HTTP status, including 5xx,
//! is the backend's answer and is returned as-is.

use std::time::Duration;

use expertdb_core::envelope::Envelope;
use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::request::RequestDescriptor;

/// Default attempts when retrying is enabled.
const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Delay before the second attempt; doubles for each one after.
const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);

/// Upper bound for a single backoff delay.
const MAX_DELAY: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first. `1` disables retrying.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    /// A single attempt.
    pub fn none() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Delay to wait after failed attempt number `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(MAX_DELAY)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_BASE_DELAY)
    }
}

impl ApiClient {
    /// [`request`](ApiClient::request) with retries of transient failures.
    ///
    /// Always settles to an envelope: the first non-transient outcome, or
    /// the last transient failure once attempts run out.
    pub async fn request_with_retry<T: DeserializeOwned>(
        &self,
        request: RequestDescriptor,
        policy: &RetryPolicy,
    ) -> Envelope<T> {
        let max_attempts = policy.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let outcome = self.request_classified::<T>(&request).await;

            let transient = outcome.failure.is_some_and(|kind| kind.is_transient());
            if !transient || attempt >= max_attempts {
                return outcome.envelope;
            }

            let delay = policy.delay_after(attempt);
            tracing::warn!(
                attempt,
                max_attempts,
                url = %request.url(),
                delay_ms = delay.as_millis() as u64,
                message = outcome.envelope.message(),
                "Transient request failure, retrying",
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}
