//! Domain models for TableScan
//!
//! - Records: schema-less items as returned by the table
//! - Pages: one scan call's worth of records plus the resume cursor
//! - Scan requests: the parameters of a single scan call

use aws_sdk_dynamodb::types::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::projection::Projection;

pub use crate::item::{Attribute, Number, Record};

/// Opaque cursor pointing just past the last item of a page
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuationToken(HashMap<String, AttributeValue>);

impl ContinuationToken {
    pub fn new(key: HashMap<String, AttributeValue>) -> Self {
        Self(key)
    }

    pub fn into_inner(self) -> HashMap<String, AttributeValue> {
        self.0
    }
}

/// Result of one scan call
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// Records in the order the table returned them
    pub items: Vec<Record>,
    /// Where the next page starts, if the table has more
    pub last_evaluated_key: Option<ContinuationToken>,
}

/// Parameters of one scan call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanRequest {
    pub projection: Option<Projection>,
    pub exclusive_start_key: Option<ContinuationToken>,
    pub page_size: Option<i32>,
}

impl ScanRequest {
    /// Request for the first page of a scan
    pub fn new(projection: Option<Projection>, page_size: Option<i32>) -> Self {
        Self {
            projection,
            exclusive_start_key: None,
            page_size,
        }
    }

    /// New request with the same parameters, resuming after `token`
    pub fn resume_after(&self, token: ContinuationToken) -> Self {
        Self {
            projection: self.projection.clone(),
            exclusive_start_key: Some(token),
            page_size: self.page_size,
        }
    }
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// The only error body ever returned to callers
    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}
