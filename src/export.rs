//! Bill-of-materials export: JSON, CSV, and a markdown build guide.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::engine::{Bom, BuildEngine};

/// Serialize a BOM as pretty JSON, category keys in order.
pub fn bom_to_json(bom: &Bom) -> Result<String, String> {
    serde_json::to_string_pretty(bom).map_err(|e| format!("Failed to serialize BOM: {}", e))
}

/// Write the selection's BOM to `path` as JSON.
pub fn export_bom_json(build: &BuildEngine, path: &Path) -> Result<(), String> {
    let json = bom_to_json(&build.bom())?;
    fs::write(path, json).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    info!("Exported BOM JSON to {}", path.display());
    Ok(())
}

/// Write the selection's BOM to `path` as CSV.
/// Columns, in order: category, id, name, price, attributes. The attributes
/// column is one JSON-encoded object per row.
pub fn export_bom_csv(build: &BuildEngine, path: &Path) -> Result<(), String> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| format!("Failed to open '{}': {}", path.display(), e))?;

    writer
        .write_record(["category", "id", "name", "price", "attributes"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for (category, part) in build.selection() {
        let attributes = serde_json::to_string(&part.attributes)
            .map_err(|e| format!("Failed to serialize attributes: {}", e))?;
        let price = format!("{:.2}", part.price);
        writer
            .write_record([
                category,
                part.id.as_str(),
                part.name.as_str(),
                price.as_str(),
                attributes.as_str(),
            ])
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush '{}': {}", path.display(), e))?;
    info!("Exported BOM CSV to {}", path.display());
    Ok(())
}

/// Write a markdown build guide: the parts list with prices, then the full
/// assembly-step sequence.
pub fn export_build_guide(build: &BuildEngine, path: &Path) -> Result<(), String> {
    let mut doc = String::from("# Build Guide\n\n## Parts\n\n");
    for (category, part) in build.selection() {
        doc.push_str(&format!(
            "* {}: {} (R$ {:.2})\n",
            category, part.name, part.price
        ));
    }
    doc.push_str(&format!("\nTotal: R$ {:.2}\n\n## Step by step\n\n", build.total_price()));
    for step in build.assembly_steps() {
        doc.push_str(&step);
        doc.push('\n');
    }

    fs::write(path, doc).map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
    info!("Exported build guide to {}", path.display());
    Ok(())
}
