//! Single-owner session state.
//!
//! One `Session` owns the catalog and the current build, and all mutation
//! goes through it on one logical owner: a thread, an actor, or a serialized
//! task queue. Ingestion (file loaders, listing imports) may run anywhere,
//! but it only ever produces a completed `Vec<Part>` batch that the owner
//! applies here; workers never touch the catalog directly.

use std::sync::Arc;

use tracing::info;

use crate::catalog::samples::sample_catalog;
use crate::catalog::types::Part;
use crate::catalog::Catalog;
use crate::engine::BuildEngine;
use crate::error::PcxError;

/// The state-owning context: one catalog, one build in progress.
#[derive(Debug, Default)]
pub struct Session {
    pub catalog: Catalog,
    pub build: BuildEngine,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session preloaded with the embedded sample catalog.
    pub fn with_sample_catalog() -> Self {
        let mut session = Self::new();
        session.apply_batch(sample_catalog());
        session
    }

    /// Apply a completed ingestion batch to the catalog. Batches are whole
    /// by contract: a loader or import that fails midway returns nothing,
    /// so no partial state ever lands here.
    pub fn apply_batch(&mut self, parts: Vec<Part>) -> usize {
        let count = parts.len();
        for part in parts {
            self.catalog.add(part);
        }
        info!("Applied a batch of {} parts to the catalog", count);
        count
    }

    /// Select a catalog part into the build by id.
    pub fn select_by_id(&mut self, id: &str) -> Result<Arc<Part>, PcxError> {
        let part = self
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| PcxError::Catalog(format!("unknown part id '{}'", id)))?;
        self.build.select(Arc::clone(&part));
        Ok(part)
    }

    /// Clear a build slot. Accepts any synonym of the canonical category.
    pub fn deselect(&mut self, category: &str) {
        self.build.deselect(category);
    }
}
