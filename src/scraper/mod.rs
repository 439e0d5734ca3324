//! Remote catalog import.
//!
//! Given a store listing URL, fetches the page and turns its product cards
//! into a bounded batch of [`Part`]s. Import runs as a background task and
//! only ever returns a completed batch; applying it to the catalog is the
//! session owner's job, so a failed import leaves no partial state behind.

pub mod adapters;
pub mod http;

use tracing::{info, warn};

use crate::catalog::types::Part;

use self::http::ImportHttpClient;

/// Cap on parts taken from a single listing page.
pub const DEFAULT_IMPORT_LIMIT: usize = 80;

/// Keyword table for coarse category inference from an item name, in the
/// order the listings name things (pt-BR). First match wins.
const CATEGORY_KEYWORDS: [(&str, &str); 9] = [
    ("placa de vídeo", "GPU"),
    ("rtx", "GPU"),
    ("processador", "CPU"),
    ("placa-mãe", "Motherboard"),
    ("memória", "RAM"),
    ("fonte", "PSU"),
    ("gabinete", "Case"),
    ("ssd", "Storage"),
    ("cooler", "Cooler"),
];

/// Infer a coarse category from a listed product name.
pub fn infer_category(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(*keyword))
        .map(|(_, category)| *category)
        .unwrap_or("Unknown")
}

/// Import a bounded batch of parts from a store listing page.
pub async fn import_listing(
    client: &ImportHttpClient,
    url: &str,
    limit: usize,
) -> Result<Vec<Part>, String> {
    let adapter =
        adapters::adapter_for_url(url).ok_or_else(|| format!("No store adapter for '{}'", url))?;
    info!(
        "Importing listing from {} via the {} adapter",
        url,
        adapter.store_name()
    );

    let html = client.fetch_page(url).await?;
    let parts = adapters::parse_listing(adapter.as_ref(), &html, limit)?;
    if parts.is_empty() {
        warn!("No products recognized at {}", url);
    } else {
        info!("Imported {} parts from {}", parts.len(), adapter.store_name());
    }
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_category_keywords() {
        assert_eq!(infer_category("Placa de Vídeo RTX 3060"), "GPU");
        assert_eq!(infer_category("GeForce RTX 4070 Super"), "GPU");
        assert_eq!(infer_category("Processador AMD Ryzen 5 5600"), "CPU");
        assert_eq!(infer_category("Placa-Mãe ASUS B660"), "Motherboard");
        assert_eq!(infer_category("Memória Kingston Fury 16GB"), "RAM");
        assert_eq!(infer_category("Fonte Corsair RM650"), "PSU");
        assert_eq!(infer_category("Gabinete NZXT H510"), "Case");
        assert_eq!(infer_category("SSD Kingston NV2 1TB"), "Storage");
        assert_eq!(infer_category("Water Cooler Arctic 240"), "Cooler");
    }

    #[test]
    fn test_infer_category_first_match_wins() {
        // A GPU bundle naming a cooler is still a GPU.
        assert_eq!(infer_category("Placa de Vídeo RTX 3080 com cooler triplo"), "GPU");
    }

    #[test]
    fn test_infer_category_unknown() {
        assert_eq!(infer_category("Mousepad Gamer 90cm"), "Unknown");
    }

    #[tokio::test]
    async fn test_import_listing_rejects_unknown_store() {
        let client = ImportHttpClient::new();
        let result = import_listing(&client, "https://www.example.com/parts", 10).await;
        assert!(result.unwrap_err().contains("No store adapter"));
    }
}
