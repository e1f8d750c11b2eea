//! Process configuration, read once at startup

use crate::errors::{Error, Result};
use crate::projection::Projection;

pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const MAX_ITEMS_ENV: &str = "MAX_ITEMS";
pub const PROJECTION_EXPRESSION_ENV: &str = "PROJECTION_EXPRESSION";
pub const SCAN_PAGE_SIZE_ENV: &str = "SCAN_PAGE_SIZE";

/// Cap applied when `MAX_ITEMS` is not set
pub const DEFAULT_MAX_ITEMS: usize = 1000;

/// Scan handler configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Table to scan
    pub table_name: String,
    /// Upper bound on records returned per invocation (always > 0)
    pub max_items: usize,
    /// Attributes returned per record
    pub projection: Option<Projection>,
    /// `Limit` sent with each scan call
    pub page_size: Option<i32>,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = lookup(TABLE_NAME_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is required", TABLE_NAME_ENV)))?;

        let max_items = match lookup(MAX_ITEMS_ENV) {
            Some(raw) => parse_positive(MAX_ITEMS_ENV, &raw)?,
            None => DEFAULT_MAX_ITEMS as i64,
        };
        let max_items = usize::try_from(max_items)
            .map_err(|_| Error::Config(format!("{} is out of range", MAX_ITEMS_ENV)))?;

        let projection = lookup(PROJECTION_EXPRESSION_ENV)
            .filter(|s| !s.trim().is_empty())
            .map(|s| Projection::parse(&s))
            .transpose()?;

        let page_size = lookup(SCAN_PAGE_SIZE_ENV)
            .map(|raw| {
                let value = parse_positive(SCAN_PAGE_SIZE_ENV, &raw)?;
                i32::try_from(value)
                    .map_err(|_| Error::Config(format!("{} is out of range", SCAN_PAGE_SIZE_ENV)))
            })
            .transpose()?;

        Ok(Self {
            table_name,
            max_items,
            projection,
            page_size,
        })
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<i64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} must be an integer, got '{}'", key, raw)))?;

    if value <= 0 {
        return Err(Error::Config(format!(
            "{} must be greater than 0, got {}",
            key, value
        )));
    }

    Ok(value)
}
