//! TableScan API Client for testing

use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use std::time::Duration;

/// API client for the scan endpoint
pub struct ScanClient {
    client: Client,
    url: String,
}

/// A scanned item, kept schema-less
pub type Record = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Raw response, for assertions on status and headers
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Result type for API responses
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    /// HTTP error with status code and body
    Http { status: StatusCode, body: String },
    /// Network or serialization error
    Request(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Request(msg) => write!(f, "Request error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ScanClient {
    /// Create a new client for the given endpoint URL
    pub fn new(url: &str) -> Self {
        // Worst case is three slow scan attempts plus 3s of backoff per page
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.to_string(),
        }
    }

    /// Create a client from environment variable
    pub fn from_env() -> Self {
        let url = std::env::var("SCAN_API_URL").expect("SCAN_API_URL environment variable not set");
        Self::new(&url)
    }

    /// Scan the table through the deployed function
    pub async fn scan(&self) -> ApiResult<Vec<Record>> {
        let response = self.send().await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&body).map_err(|e| ApiError::Request(e.to_string()))
        } else {
            Err(ApiError::Http { status, body })
        }
    }

    /// Scan and return the response without interpreting it
    pub async fn scan_raw(&self) -> ApiResult<RawResponse> {
        let response = self.send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    async fn send(&self) -> ApiResult<Response> {
        self.client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))
    }
}
