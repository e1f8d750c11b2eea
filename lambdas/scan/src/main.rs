//! TableScan Scan Lambda
//!
//! Handles every routed request by scanning the configured table and
//! returning up to `MAX_ITEMS` records as a JSON array.

use aws_config::BehaviorVersion;
use lambda_http::{run, service_fn, Error as LambdaError};
use tablescan_core::{handle, Config, DynamoClient, Scanner};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    // Configuration errors stop the process before any invocation is served
    let config =
        Config::from_env().inspect_err(|e| error!(error = %e, "Invalid configuration"))?;

    info!(
        table = %config.table_name,
        max_items = config.max_items,
        projection = config.projection.as_ref().map(|p| p.source()),
        page_size = config.page_size,
        "Starting scan function"
    );

    // Initialize AWS clients once per process
    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let dynamo_client = aws_sdk_dynamodb::Client::new(&aws_config);
    let client = DynamoClient::new(dynamo_client, config.table_name.clone());
    let scanner = Scanner::new(client, &config);

    run(service_fn(|event| handle(&scanner, event))).await
}
