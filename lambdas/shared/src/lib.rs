//! TableScan Core Library
//!
//! Everything behind the scan Lambda function:
//! - Configuration and domain models
//! - DynamoDB scan access
//! - Retry with backoff and page aggregation
//! - HTTP response handling
//! - Error types

pub mod config;
pub mod models;
pub mod item;
pub mod projection;
pub mod dynamo;
pub mod retry;
pub mod scanner;
pub mod handler;
pub mod errors;

#[cfg(test)]
mod testing;

pub use config::Config;
pub use models::*;
pub use projection::Projection;
pub use dynamo::{DynamoClient, ScanStore};
pub use retry::{fetch_page, RetryPolicy, Sleeper, TokioSleeper};
pub use scanner::Scanner;
pub use handler::handle;
pub use errors::{Error, Result};
