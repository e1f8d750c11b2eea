//! Scan aggregation
//!
//! Pages through the whole table, one page at a time, until one of:
//!
//! 1. a page comes back empty (even if it carries a continuation token)
//! 2. the accumulated records reach the cap
//! 3. the table reports no further pages
//!
//! The result is then cut down to the cap, keeping pagination order.

use tracing::{debug, info};

use crate::config::Config;
use crate::dynamo::ScanStore;
use crate::errors::Result;
use crate::models::{Record, ScanRequest};
use crate::retry::{fetch_page, RetryPolicy, Sleeper, TokioSleeper};

/// Process-wide scan state, built once and shared by every invocation
pub struct Scanner<S, Z = TokioSleeper> {
    store: S,
    sleeper: Z,
    retry: RetryPolicy,
    max_items: usize,
    base_request: ScanRequest,
}

impl<S: ScanStore> Scanner<S> {
    /// Scanner with the default retry policy sleeping on the Tokio timer
    pub fn new(store: S, config: &Config) -> Self {
        Self::with_sleeper(store, config, RetryPolicy::default(), TokioSleeper)
    }
}

impl<S: ScanStore, Z: Sleeper> Scanner<S, Z> {
    pub fn with_sleeper(store: S, config: &Config, retry: RetryPolicy, sleeper: Z) -> Self {
        Self {
            store,
            sleeper,
            retry,
            max_items: config.max_items,
            base_request: ScanRequest::new(config.projection.clone(), config.page_size),
        }
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Scan the table and return at most `max_items` records.
    ///
    /// Any error aborts the scan; records gathered so far are dropped.
    pub async fn aggregate(&self) -> Result<Vec<Record>> {
        let mut records: Vec<Record> = Vec::new();
        let mut request = self.base_request.clone();
        let mut pages = 0u32;

        loop {
            let page = fetch_page(&self.store, &request, &self.retry, &self.sleeper).await?;
            pages += 1;

            if page.items.is_empty() {
                info!(pages, count = records.len(), "No more items to scan");
                break;
            }

            records.extend(page.items);

            if records.len() >= self.max_items {
                debug!(pages, count = records.len(), "Reached item cap");
                break;
            }

            match page.last_evaluated_key {
                Some(token) => request = self.base_request.resume_after(token),
                None => break,
            }
        }

        if records.len() > self.max_items {
            info!(
                dropped = records.len() - self.max_items,
                max_items = self.max_items,
                "Truncating scan result to item cap"
            );
            records.truncate(self.max_items);
        }

        Ok(records)
    }
}
