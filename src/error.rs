use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcxError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Import error: {0}")]
    Import(String),

    #[error("History error: {0}")]
    History(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl From<PcxError> for String {
    fn from(err: PcxError) -> Self {
        err.to_string()
    }
}
