//! Projection expression handling
//!
//! A configured projection such as `id,name,address.city` is rewritten to
//! `#p0, #p1, #p2.#p3` together with the matching expression attribute names.
//! DynamoDB rejects reserved words (`name`, `status`, `data`, ...) used
//! directly in a projection, so every segment goes through a placeholder.
//! List indexes (`tags[0]`) are kept as written.
//!
//! DynamoDB also rejects a projection naming the same path twice, or a path
//! together with one nested inside it, so those fail at startup instead.

use std::collections::HashMap;

use crate::errors::{Error, Result};

/// A parsed projection expression, ready to be sent with a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    source: String,
    expression: String,
    names: HashMap<String, String>,
}

impl Projection {
    /// Parse a comma-separated list of attribute paths
    pub fn parse(source: &str) -> Result<Self> {
        let mut placeholders: HashMap<&str, String> = HashMap::new();
        let mut paths: Vec<(&str, String)> = Vec::new();

        for path in source.split(',') {
            let path = path.trim();
            if path.is_empty() {
                return Err(Error::Config(format!(
                    "Empty attribute path in projection expression '{}'",
                    source
                )));
            }

            let mut segments = Vec::new();
            for segment in path.split('.') {
                let (name, index) = split_index(segment.trim()).ok_or_else(|| {
                    Error::Config(format!(
                        "Invalid attribute path '{}' in projection expression",
                        path
                    ))
                })?;

                let next = placeholders.len();
                let placeholder = placeholders
                    .entry(name)
                    .or_insert_with(|| format!("#p{}", next));
                segments.push(format!("{}{}", placeholder, index));
            }
            let rewritten = segments.join(".");
            if let Some((other, _)) = paths
                .iter()
                .find(|(_, existing)| overlaps(existing, &rewritten))
            {
                return Err(Error::Config(format!(
                    "Overlapping attribute paths '{}' and '{}' in projection expression",
                    other, path
                )));
            }
            paths.push((path, rewritten));
        }

        let names = placeholders
            .into_iter()
            .map(|(name, placeholder)| (placeholder, name.to_string()))
            .collect();

        Ok(Self {
            source: source.trim().to_string(),
            expression: paths
                .into_iter()
                .map(|(_, rewritten)| rewritten)
                .collect::<Vec<_>>()
                .join(", "),
            names,
        })
    }

    /// The projection as configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The rewritten expression, e.g. `#p0, #p1`
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Placeholder to attribute name mapping for `ExpressionAttributeNames`
    pub fn attribute_names(&self) -> &HashMap<String, String> {
        &self.names
    }
}

/// Whether one rewritten path equals the other or contains it
fn overlaps(a: &str, b: &str) -> bool {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    match long.strip_prefix(short) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

/// Split `tags[0][1]` into (`tags`, `[0][1]`)
fn split_index(segment: &str) -> Option<(&str, &str)> {
    let (name, suffix) = match segment.find('[') {
        Some(i) => segment.split_at(i),
        None => (segment, ""),
    };

    if name.is_empty() || name.contains(']') || name.starts_with('#') {
        return None;
    }

    let mut rest = suffix;
    while !rest.is_empty() {
        let inner = rest.strip_prefix('[')?;
        let close = inner.find(']')?;
        let digits = &inner[..close];
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        rest = &inner[close + 1..];
    }

    Some((name, suffix))
}
