//! Build-configuration engine.
//!
//! Holds the current selection (one optional part per canonical category
//! slot) and derives everything a buyer wants to know before purchase:
//!
//! - **Price**: sum over occupied slots
//! - **Power**: TDP-based draw estimate plus a PSU recommendation
//! - **Compatibility**: a fixed, ordered rule set over part attributes
//! - **Assembly**: a deterministic step-by-step mounting procedure
//! - **BOM**: the exportable bill of materials
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use pcx::{BuildEngine, Part};
//!
//! let mut build = BuildEngine::new();
//! build.select(Arc::new(Part::new("cpu_01", "CPU", "Ryzen 5 5600", 750.0)));
//!
//! let power = build.estimated_power();
//! println!("{}W drawn, {}W recommended", power.consumed_w, power.recommended_w);
//!
//! for issue in build.compatibility_issues() {
//!     println!("issue: {}", issue);
//! }
//! for step in build.assembly_steps() {
//!     println!("{}", step);
//! }
//! ```

mod assembly;
mod build;
mod compat;

pub use build::{Bom, BomEntry, BuildEngine, PowerEstimate};
