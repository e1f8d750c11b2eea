//! Conversion of DynamoDB items into JSON records
//!
//! Numbers keep the exact digits DynamoDB sent (up to 38 significant
//! digits), so they are emitted verbatim instead of going through `f64`.
//! Binary values become standard base64 strings.

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::{BTreeMap, HashMap};

use crate::errors::{Error, Result};

/// A single item, attribute name to value. Structure is owned by the table.
pub type Record = BTreeMap<String, Attribute>;

/// JSON rendering of one attribute value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Attribute {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    List(Vec<Attribute>),
    Map(BTreeMap<String, Attribute>),
}

/// A number exactly as the table reported it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number(String);

impl Number {
    /// Accepts any string that is a valid JSON number
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if !(raw.starts_with('-') || raw.starts_with(|c: char| c.is_ascii_digit())) {
            return None;
        }
        serde_json::from_str::<&RawValue>(raw).ok()?;
        Some(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        RawValue::from_string(self.0.clone())
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl From<u64> for Attribute {
    fn from(value: u64) -> Self {
        Attribute::Number(Number(value.to_string()))
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::String(value.to_string())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Attribute::String(value)
    }
}

/// Convert a raw DynamoDB item into a record
pub fn record_from_item(item: HashMap<String, AttributeValue>) -> Result<Record> {
    item.into_iter()
        .map(|(name, value)| Ok((name, attribute_from_value(value)?)))
        .collect()
}

fn attribute_from_value(value: AttributeValue) -> Result<Attribute> {
    let attribute = match value {
        AttributeValue::S(s) => Attribute::String(s),
        AttributeValue::N(n) => Attribute::Number(number(&n)?),
        AttributeValue::Bool(b) => Attribute::Bool(b),
        AttributeValue::Null(_) => Attribute::Null,
        AttributeValue::B(blob) => Attribute::String(STANDARD.encode(blob.as_ref())),
        AttributeValue::Ss(values) => {
            Attribute::List(values.into_iter().map(Attribute::String).collect())
        }
        AttributeValue::Ns(values) => Attribute::List(
            values
                .iter()
                .map(|n| number(n).map(Attribute::Number))
                .collect::<Result<_>>()?,
        ),
        AttributeValue::Bs(values) => Attribute::List(
            values
                .iter()
                .map(|blob| Attribute::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        ),
        AttributeValue::L(values) => Attribute::List(
            values
                .into_iter()
                .map(attribute_from_value)
                .collect::<Result<_>>()?,
        ),
        AttributeValue::M(map) => Attribute::Map(record_from_item(map)?),
        other => {
            return Err(Error::DynamoSerialization(format!(
                "Unsupported attribute value: {:?}",
                other
            )))
        }
    };
    Ok(attribute)
}

fn number(raw: &str) -> Result<Number> {
    Number::parse(raw)
        .ok_or_else(|| Error::DynamoSerialization(format!("Invalid number attribute '{}'", raw)))
}
