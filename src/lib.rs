pub mod catalog;
pub mod engine;
mod error;
pub mod export;
pub mod history;
pub mod ingest;
pub mod scraper;
pub mod session;

pub use catalog::types::{AttrValue, Attributes, Part};
pub use catalog::Catalog;
pub use engine::{Bom, BomEntry, BuildEngine, PowerEstimate};
pub use error::PcxError;
pub use history::{BuildHistory, BuildRecord};
pub use session::Session;

/// Install the default tracing subscriber, honoring `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
