//! In-memory fakes shared by the unit tests

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::{HashMap, VecDeque};
use std::ops::Range;
use std::sync::Mutex;
use std::time::Duration;

use crate::dynamo::ScanStore;
use crate::errors::{Error, Result};
use crate::models::{Attribute, ContinuationToken, Page, Record, ScanRequest};
use crate::retry::Sleeper;

/// Replays a fixed sequence of scan results and records every request
pub struct ScriptedStore {
    responses: Mutex<VecDeque<Result<Page>>>,
    requests: Mutex<Vec<ScanRequest>>,
}

impl ScriptedStore {
    pub fn new(responses: Vec<Result<Page>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().expect("poisoned mutex").len()
    }

    pub fn requests(&self) -> Vec<ScanRequest> {
        self.requests.lock().expect("poisoned mutex").clone()
    }
}

#[async_trait]
impl ScanStore for ScriptedStore {
    async fn scan_page(&self, request: &ScanRequest) -> Result<Page> {
        self.requests
            .lock()
            .expect("poisoned mutex")
            .push(request.clone());
        self.responses
            .lock()
            .expect("poisoned mutex")
            .pop_front()
            .unwrap_or_else(|| Err(Error::Unexpected("script exhausted".into())))
    }
}

/// Records requested waits instead of sleeping
#[derive(Default)]
pub struct RecordingSleeper {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().expect("poisoned mutex").clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.waits.lock().expect("poisoned mutex").push(duration);
    }
}

/// `{"id": "item-N", "name": "Item N", "price": N}` for each N in `ids`
pub fn records(ids: Range<usize>) -> Vec<Record> {
    ids.map(|i| {
        Record::from([
            ("id".to_string(), Attribute::from(format!("item-{}", i))),
            ("name".to_string(), Attribute::from(format!("Item {}", i))),
            ("price".to_string(), Attribute::from(i as u64)),
        ])
    })
    .collect()
}

/// Continuation token keyed on `id`
pub fn token(id: &str) -> ContinuationToken {
    let mut key = HashMap::new();
    key.insert("id".to_string(), AttributeValue::S(id.to_string()));
    ContinuationToken::new(key)
}

pub fn page(items: Vec<Record>, next: Option<&str>) -> Page {
    Page {
        items,
        last_evaluated_key: next.map(token),
    }
}
