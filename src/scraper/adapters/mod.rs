mod kabum;
mod pichau;
mod terabyte;

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::catalog::types::{AttrValue, Part};
use crate::ingest::parse_price_brl;

use super::infer_category;

/// Trait for store-specific listing markup. Each adapter knows which hosts
/// it serves and which selectors find a product card, its name, and its
/// price on that store's category pages.
pub trait StoreAdapter: Send + Sync {
    /// Canonical store name (lowercase), recorded as provenance on every
    /// imported part.
    fn store_name(&self) -> &str;

    /// Host names this adapter handles (matched by substring on the URL
    /// host).
    fn hosts(&self) -> &[&str];

    /// CSS selector matching one product card.
    fn card_selector(&self) -> &str;

    /// Optional CSS selector for the product name within a card. When
    /// absent, the card's text is used.
    fn name_selector(&self) -> Option<&str> {
        None
    }

    /// CSS selectors probed, in order, for the price element within a card.
    fn price_selectors(&self) -> &[&str];

    /// Fallback id prefix for cards without a usable link.
    fn id_prefix(&self) -> &str;
}

/// Return instances of all registered store adapters.
pub fn all_adapters() -> Vec<Box<dyn StoreAdapter>> {
    vec![
        Box::new(kabum::Kabum),
        Box::new(pichau::Pichau),
        Box::new(terabyte::Terabyte),
    ]
}

/// Find the adapter for a listing URL by its host.
/// Returns None for hosts no adapter claims.
pub fn adapter_for_url(url: &str) -> Option<Box<dyn StoreAdapter>> {
    let host = Url::parse(url).ok()?.host_str()?.to_lowercase();
    all_adapters()
        .into_iter()
        .find(|adapter| adapter.hosts().iter().any(|h| host.contains(h)))
}

/// Parse a listing page into a bounded batch of parts.
///
/// Cards without any readable name are skipped; ids derive from the product
/// link (last path segment) and duplicates keep the first occurrence. Every
/// part carries `source` and, when a link exists, `link` provenance
/// attributes.
pub fn parse_listing(
    adapter: &dyn StoreAdapter,
    html: &str,
    limit: usize,
) -> Result<Vec<Part>, String> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse(adapter.card_selector())
        .map_err(|e| format!("Bad card selector for {}: {}", adapter.store_name(), e))?;
    let link_selector =
        Selector::parse("a[href]").map_err(|e| format!("Bad link selector: {}", e))?;
    let name_selector = adapter
        .name_selector()
        .map(Selector::parse)
        .transpose()
        .map_err(|e| format!("Bad name selector for {}: {}", adapter.store_name(), e))?;
    let price_selectors: Vec<Selector> = adapter
        .price_selectors()
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect();

    let mut seen = HashSet::new();
    let mut parts = Vec::new();

    for card in document.select(&card_selector) {
        let href = if card.value().name() == "a" {
            card.value().attr("href")
        } else {
            card.select(&link_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
        };

        let name = name_selector
            .as_ref()
            .and_then(|selector| card.select(selector).next())
            .map(element_text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| element_text(card));
        let name: String = name.chars().take(200).collect();
        if name.is_empty() {
            continue;
        }

        let price = price_selectors
            .iter()
            .find_map(|selector| card.select(selector).next())
            .map(|element| parse_price_brl(&element_text(element)))
            .unwrap_or(0.0);

        let id = href
            .and_then(|h| h.trim_end_matches('/').rsplit('/').next())
            .filter(|tail| !tail.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}_{}", adapter.id_prefix(), parts.len()));
        if !seen.insert(id.clone()) {
            continue;
        }

        let mut part = Part::new(id, infer_category(&name), name, price)
            .with_attribute("source", AttrValue::Text(adapter.store_name().to_string()));
        if let Some(href) = href {
            part = part.with_attribute("link", AttrValue::Text(href.to_string()));
        }
        parts.push(part);

        if parts.len() >= limit {
            break;
        }
    }

    Ok(parts)
}

/// Element text with whitespace collapsed.
fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
