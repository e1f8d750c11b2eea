//! Page fetch with bounded retry and exponential backoff

use async_trait::async_trait;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::dynamo::ScanStore;
use crate::errors::Result;
use crate::models::{Page, ScanRequest};

/// How often, and how patiently, a failed page fetch is attempted again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` counts the first call; it is raised to at least 1
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait after the failed attempt `attempt` (0-based): `base * 2^attempt`
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl Default for RetryPolicy {
    /// 3 attempts, waiting 1s then 2s between them
    fn default() -> Self {
        Self::new(3, Duration::from_secs(1))
    }
}

/// Source of backoff delays
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the Tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Fetch one page, retrying retryable failures according to `policy`.
///
/// Returns the page exactly as the store reported it. Non-retryable errors
/// are returned immediately; a retryable error on the last attempt is
/// returned as-is.
pub async fn fetch_page<S, Z>(
    store: &S,
    request: &ScanRequest,
    policy: &RetryPolicy,
    sleeper: &Z,
) -> Result<Page>
where
    S: ScanStore + ?Sized,
    Z: Sleeper + ?Sized,
{
    let mut attempt = 0;

    loop {
        match store.scan_page(request).await {
            Ok(page) => {
                if page.items.is_empty() {
                    info!("Scan page returned no items");
                }
                return Ok(page);
            }
            Err(e) if e.is_retryable() => {
                if attempt + 1 >= policy.max_attempts() {
                    error!(
                        error = %e,
                        attempts = attempt + 1,
                        "Scan page failed after all retry attempts"
                    );
                    return Err(e);
                }

                let wait = policy.backoff(attempt);
                warn!(
                    error = %e,
                    attempt = attempt + 1,
                    max_attempts = policy.max_attempts(),
                    wait_ms = wait.as_millis() as u64,
                    "Scan page failed, retrying"
                );
                sleeper.sleep(wait).await;
                attempt += 1;
            }
            Err(e) => {
                error!(error = %e, code = e.code(), "Unexpected error while scanning page");
                return Err(e);
            }
        }
    }
}
