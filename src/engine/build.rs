//! Slot management, price total, power estimate, and the BOM view.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::category::normalize_category;
use crate::catalog::types::{Attributes, Part};

/// Fixed draw for fans, drives, and board circuitry not itemized per part.
const POWER_BASELINE_W: f64 = 50.0;
/// Headroom factor applied when sizing the power supply.
const PSU_HEADROOM: f64 = 1.3;

/// Estimated system power draw, in watts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerEstimate {
    /// Sum of per-part TDP plus the baseline, rounded down.
    pub consumed_w: u32,
    /// Minimum PSU rating to recommend: consumed with headroom, rounded up.
    pub recommended_w: u32,
}

/// One entry of the exported bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomEntry {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub attributes: Attributes,
}

/// The exported build: canonical category to selected part. This is the sole
/// externally persisted representation of a selection.
pub type Bom = BTreeMap<String, BomEntry>;

/// The current selection: at most one part per canonical category slot.
///
/// A slot is an optional single reference, never a collection. Assigning a
/// part to an occupied slot replaces the occupant.
#[derive(Debug, Default)]
pub struct BuildEngine {
    slots: BTreeMap<String, Arc<Part>>,
}

impl BuildEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `part` to its category's slot, replacing any prior occupant.
    /// The category is folded through the canonical alias table, so parts
    /// that never went through a catalog land in the right slot too.
    pub fn select(&mut self, part: Arc<Part>) {
        let slot = normalize_category(&part.category);
        if let Some(prev) = self.slots.insert(slot.clone(), part) {
            debug!("Replaced {} selection '{}'", slot, prev.id);
        }
    }

    /// Clear the slot for `category`. No-op when the slot is empty.
    /// Accepts any synonym of the canonical name.
    pub fn deselect(&mut self, category: &str) -> Option<Arc<Part>> {
        self.slots.remove(&normalize_category(category))
    }

    pub(crate) fn slot(&self, category: &str) -> Option<&Part> {
        self.slots.get(category).map(Arc::as_ref)
    }

    /// Occupied slots in category order.
    pub fn selection(&self) -> impl Iterator<Item = (&str, &Part)> {
        self.slots
            .iter()
            .map(|(category, part)| (category.as_str(), part.as_ref()))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Sum of prices over occupied slots; 0.0 for an empty selection.
    pub fn total_price(&self) -> f64 {
        self.slots.values().map(|part| part.price).sum()
    }

    /// Estimate draw from each part's TDP attribute. Parts without a usable
    /// TDP contribute nothing; the estimate is best-effort by design.
    pub fn estimated_power(&self) -> PowerEstimate {
        let mut consumed = POWER_BASELINE_W;
        for part in self.slots.values() {
            if let Some(tdp) = part.attr_f64(&["tdp_w", "tdp"]) {
                consumed += tdp;
            }
        }
        PowerEstimate {
            consumed_w: consumed.floor() as u32,
            recommended_w: (consumed * PSU_HEADROOM).ceil() as u32,
        }
    }

    /// Snapshot the selection as a bill of materials.
    pub fn bom(&self) -> Bom {
        self.slots
            .iter()
            .map(|(category, part)| {
                (
                    category.clone(),
                    BomEntry {
                        id: part.id.clone(),
                        name: part.name.clone(),
                        price: part.price,
                        attributes: part.attributes.clone(),
                    },
                )
            })
            .collect()
    }
}
