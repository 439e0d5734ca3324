//! Part catalog: the universe of known parts, indexed by canonical category
//! and by id.

pub mod category;
pub mod samples;
pub mod types;

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use self::category::normalize_category;
use self::types::Part;

/// Registry of known parts.
///
/// Parts are shared via `Arc`: registered once, then referenced from build
/// slots without copying. Both indexes always reach exactly the same parts,
/// and the category stored on a part equals its index key. Re-adding an id
/// replaces the prior entry, including its category filing.
#[derive(Debug, Default)]
pub struct Catalog {
    by_category: BTreeMap<String, Vec<Arc<Part>>>,
    by_id: HashMap<String, Arc<Part>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a part, canonicalizing its category. Within a category,
    /// insertion order is preserved.
    pub fn add(&mut self, mut part: Part) -> Arc<Part> {
        part.category = normalize_category(&part.category);
        let part = Arc::new(part);

        if let Some(prior) = self.by_id.insert(part.id.clone(), Arc::clone(&part)) {
            debug!("Replacing catalog entry '{}'", part.id);
            if let Some(parts) = self.by_category.get_mut(&prior.category) {
                parts.retain(|p| p.id != part.id);
                if parts.is_empty() {
                    self.by_category.remove(&prior.category);
                }
            }
        }

        self.by_category
            .entry(part.category.clone())
            .or_default()
            .push(Arc::clone(&part));
        part
    }

    /// Sorted, deduplicated category names currently present.
    pub fn categories(&self) -> Vec<String> {
        self.by_category.keys().cloned().collect()
    }

    /// Parts filed under the exact canonical name, in insertion order.
    pub fn parts_in(&self, category: &str) -> &[Arc<Part>] {
        self.by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Look up a part by id.
    pub fn find(&self, id: &str) -> Option<&Arc<Part>> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
