//! Structured (JSON) catalog ingestion.
//!
//! Accepts either a top-level sequence of records or an object with a
//! `parts` field. Records may use English or Portuguese field names; prices
//! may be numeric or comma-decimal strings.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::catalog::types::{AttrValue, Attributes, Part};

use super::price::parse_price_brl;

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default, alias = "categoria")]
    category: Option<String>,
    #[serde(default, alias = "nome")]
    name: Option<String>,
    #[serde(default, alias = "preco")]
    price: Option<Value>,
    #[serde(default, alias = "atributos")]
    attributes: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { parts: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

/// Load a catalog batch from a JSON file.
pub fn load_json_catalog(path: &Path) -> Result<Vec<Part>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;
    parse_catalog_str(&content)
}

/// Parse catalog JSON already in memory.
pub fn parse_catalog_str(content: &str) -> Result<Vec<Part>> {
    let document: CatalogDocument =
        serde_json::from_str(content).context("parsing catalog JSON")?;
    let records = match document {
        CatalogDocument::Wrapped { parts } => parts,
        CatalogDocument::Bare(records) => records,
    };
    Ok(records.into_iter().map(part_from_record).collect())
}

/// Keep the scalar entries of a JSON object as attributes.
pub(crate) fn json_attributes(map: serde_json::Map<String, Value>) -> Attributes {
    map.into_iter()
        .filter_map(|(key, value)| AttrValue::from_json(&value).map(|attr| (key, attr)))
        .collect()
}

fn part_from_record(record: RawRecord) -> Part {
    let id = match record.id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };
    let price = match record.price {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_price_brl(&s),
        _ => 0.0,
    };

    Part {
        id,
        category: record.category.unwrap_or_else(|| "Unknown".to_string()),
        name: record.name.unwrap_or_default(),
        price: price.max(0.0),
        attributes: record.attributes.map(json_attributes).unwrap_or_default(),
    }
}
