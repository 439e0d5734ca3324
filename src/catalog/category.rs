//! Canonical category normalization.
//!
//! Source data labels the same slot many ways ("Fonte", "PSU", "Power
//! Supply"). Every label is folded into one canonical name through a single
//! static lookup table, consulted once per catalog insertion. Unknown labels
//! pass through trimmed but otherwise untouched.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The slot names the build engine knows about.
pub const CANONICAL_CATEGORIES: [&str; 8] = [
    "CPU",
    "Motherboard",
    "RAM",
    "GPU",
    "Case",
    "PSU",
    "Cooler",
    "Storage",
];

/// Exact-match synonyms, keyed by lowercase label.
static CATEGORY_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("motherboard", "Motherboard"),
        ("mainboard", "Motherboard"),
        ("placa-mãe", "Motherboard"),
        ("gpu", "GPU"),
        ("video card", "GPU"),
        ("placa de vídeo", "GPU"),
        ("cpu", "CPU"),
        ("processor", "CPU"),
        ("processador", "CPU"),
        ("ram", "RAM"),
        ("memory", "RAM"),
        ("memória", "RAM"),
        ("psu", "PSU"),
        ("power supply", "PSU"),
        ("fonte", "PSU"),
        ("case", "Case"),
        ("gabinete", "Case"),
        ("ssd", "Storage"),
        ("hdd", "Storage"),
        ("storage", "Storage"),
        ("armazenamento", "Storage"),
        ("cooler", "Cooler"),
        ("aio", "Cooler"),
        ("resfriamento", "Cooler"),
    ])
});

/// Labels containing any of these are motherboards even when the full label
/// is something like "Placa-mãe ATX LGA1700".
const BOARD_TERMS: [&str; 3] = ["motherboard", "mainboard", "placa-mãe"];

/// Fold a free-text category label into its canonical form.
/// Case-insensitive; surrounding whitespace is ignored. Idempotent over the
/// canonical set.
pub fn normalize_category(label: &str) -> String {
    let trimmed = label.trim();
    let lower = trimmed.to_lowercase();

    if let Some(canonical) = CATEGORY_ALIASES.get(lower.as_str()) {
        return (*canonical).to_string();
    }
    if BOARD_TERMS.iter().any(|term| lower.contains(term)) {
        return "Motherboard".to_string();
    }
    trimmed.to_string()
}
