//! Sample catalog embedded in the binary at compile time, so a fresh
//! install has something to browse before any import runs.

use crate::ingest::json::parse_catalog_str;

use super::types::Part;

const SAMPLE_CATALOG: &str = include_str!("../../config/sample_catalog.json");

/// The embedded starter parts, ready to feed into a [`super::Catalog`].
///
/// # Panics
/// Panics if the embedded JSON is invalid (this would be a compile-time bug).
pub fn sample_catalog() -> Vec<Part> {
    parse_catalog_str(SAMPLE_CATALOG).expect("embedded sample_catalog.json must be valid JSON")
}
