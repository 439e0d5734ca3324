//! Tabular catalog ingestion.
//!
//! Recognized columns: `id` (falling back to `sku`), `category`, `name`,
//! `price`, and an optional `attributes` column holding a JSON object. Every
//! other column becomes an attribute via best-effort coercion, with an
//! `attr_` prefix stripped off the key when present.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::types::Part;

use super::json::json_attributes;
use super::price::{coerce_attribute, parse_price_brl};

const RESERVED_COLUMNS: [&str; 6] = ["id", "sku", "category", "name", "price", "attributes"];

/// Load a catalog batch from a CSV file. The whole file is collected before
/// anything is returned, so a midway failure hands back nothing.
pub fn load_csv_catalog(path: &Path) -> Result<Vec<Part>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening catalog file {}", path.display()))?;
    let headers = reader.headers().context("reading CSV header")?.clone();

    let mut parts = Vec::new();
    for record in reader.records() {
        let record = record.context("reading CSV record")?;
        let field = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .and_then(|index| record.get(index))
                .map(str::trim)
                .filter(|value| !value.is_empty())
        };

        let id = field("id").or_else(|| field("sku")).unwrap_or("").to_string();
        let category = field("category").unwrap_or("Unknown").to_string();
        let name = field("name").unwrap_or("").to_string();
        let price = field("price").map(parse_price_brl).unwrap_or(0.0);

        // A malformed attributes blob recovers to an empty set.
        let mut attributes = field("attributes")
            .and_then(|raw| serde_json::from_str::<serde_json::Map<_, _>>(raw).ok())
            .map(json_attributes)
            .unwrap_or_default();

        for (header, value) in headers.iter().zip(record.iter()) {
            let value = value.trim();
            if value.is_empty() || RESERVED_COLUMNS.contains(&header) {
                continue;
            }
            let key = header.strip_prefix("attr_").unwrap_or(header);
            attributes.insert(key.to_string(), coerce_attribute(value));
        }

        parts.push(Part {
            id,
            category,
            name,
            price,
            attributes,
        });
    }

    debug!("Loaded {} parts from {}", parts.len(), path.display());
    Ok(parts)
}
