//! TableScan Integration Tests
//!
//! These tests run against a deployed scan function:
//! - `SCAN_API_URL` selects the endpoint (tests are skipped without it)
//! - `TABLE_NAME` additionally enables tests that seed the scanned table
//!
//! Run with: cargo test --manifest-path tests/integration/Cargo.toml

pub mod client;

pub use client::ScanClient;
pub use fixtures::*;
