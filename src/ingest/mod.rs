//! Catalog ingestion: currency parsing, attribute coercion, file loaders.
//!
//! Loaders collect a complete batch before returning, so a failure midway
//! never leaves a partially ingested catalog. Applying a batch is the
//! session owner's job; see [`crate::session`].

pub mod csv;
pub mod json;
pub mod price;

pub use self::csv::load_csv_catalog;
pub use self::json::{load_json_catalog, parse_catalog_str};
pub use self::price::{coerce_attribute, parse_price_brl};
