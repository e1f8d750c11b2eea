//! HTTP entry point
//!
//! Handles any request routed to the function by scanning the table:
//! - 200 with a JSON array of records
//! - 500 with `{"error": "Internal server error"}` on any failure

use lambda_http::{Body, Error as LambdaError, Request, Response};
use serde::Serialize;
use tracing::{error, info};

use crate::dynamo::ScanStore;
use crate::errors::Error;
use crate::models::ErrorResponse;
use crate::retry::Sleeper;
use crate::scanner::Scanner;

/// Scan the table and render the result as an HTTP response
pub async fn handle<S, Z>(
    scanner: &Scanner<S, Z>,
    event: Request,
) -> Result<Response<Body>, LambdaError>
where
    S: ScanStore,
    Z: Sleeper,
{
    info!(method = %event.method(), path = %event.uri().path(), "Processing scan request");

    match scanner.aggregate().await {
        Ok(records) => {
            info!(count = records.len(), max_items = scanner.max_items(), "Scan completed");
            json_response(200, &records)
        }
        Err(e) => error_response(e),
    }
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, LambdaError> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(body)?))?)
}

fn error_response(e: Error) -> Result<Response<Body>, LambdaError> {
    error!(error = %e, code = e.code(), "Scan request failed");
    json_response(e.status_code(), &ErrorResponse::internal())
}
