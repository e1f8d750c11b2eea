//! DynamoDB operations for TableScan
//!
//! Only the `Scan` API is used. Service error responses are mapped to
//! [`Error::Database`] (retryable), everything else to [`Error::Unexpected`].

use async_trait::async_trait;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::operation::scan::{ScanError, ScanOutput};
use aws_sdk_dynamodb::Client;
use std::fmt::Debug;
use tracing::debug;

use crate::errors::{Error, Result};
use crate::item::record_from_item;
use crate::models::{ContinuationToken, Page, Record, ScanRequest};

/// A table that can be read one scan page at a time
#[async_trait]
pub trait ScanStore: Send + Sync {
    /// Issue exactly one scan call
    async fn scan_page(&self, request: &ScanRequest) -> Result<Page>;
}

/// DynamoDB client for TableScan operations
pub struct DynamoClient {
    client: Client,
    table_name: String,
}

impl DynamoClient {
    /// Create a client bound to one table
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }
}

#[async_trait]
impl ScanStore for DynamoClient {
    async fn scan_page(&self, request: &ScanRequest) -> Result<Page> {
        let projection = request.projection.as_ref();

        debug!(
            table = %self.table_name,
            resuming = request.exclusive_start_key.is_some(),
            "Scanning page"
        );

        let output = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_projection_expression(projection.map(|p| p.expression().to_string()))
            .set_expression_attribute_names(projection.map(|p| p.attribute_names().clone()))
            .set_exclusive_start_key(
                request
                    .exclusive_start_key
                    .clone()
                    .map(ContinuationToken::into_inner),
            )
            .set_limit(request.page_size)
            .send()
            .await
            .map_err(map_scan_error)?;

        page_from_output(output)
    }
}

/// Convert a scan response into a page. An empty `LastEvaluatedKey` means
/// the scan is complete.
pub fn page_from_output(output: ScanOutput) -> Result<Page> {
    let items = output
        .items
        .unwrap_or_default()
        .into_iter()
        .map(record_from_item)
        .collect::<Result<Vec<Record>>>()?;

    let last_evaluated_key = output
        .last_evaluated_key
        .filter(|key| !key.is_empty())
        .map(ContinuationToken::new);

    Ok(Page {
        items,
        last_evaluated_key,
    })
}

/// Map a Scan SDK error to Error.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> Error {
    match err {
        SdkError::ServiceError(context) => {
            let err = context.into_err();
            let summary = match &err {
                ScanError::ProvisionedThroughputExceededException(_) => "Throughput exceeded",
                ScanError::RequestLimitExceeded(_) => "Request limit exceeded",
                ScanError::InternalServerError(_) => "DynamoDB internal server error",
                ScanError::ResourceNotFoundException(_) => "Table not found",
                _ => "Scan failed",
            };
            let detail = err
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            Error::Database(format!("{}: {}", summary, detail))
        }
        other => Error::Unexpected(format!(
            "Scan request failed: {}",
            DisplayErrorContext(&other)
        )),
    }
}
