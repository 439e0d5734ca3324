use serde::Serialize;
use serde_json::Value;

/// One stored build, as returned by history queries.
///
/// `bom` is the parsed bill of materials; a corrupt stored payload comes
/// back as `{"error": "invalid data"}` so one bad row never fails a listing.
#[derive(Debug, Clone, Serialize)]
pub struct BuildRecord {
    pub id: i64,
    pub name: String,
    pub bom: Value,
    pub created_at: String,
}
