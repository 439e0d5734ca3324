use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};
use serde_json::json;
use tracing::info;

use crate::engine::Bom;

use super::types::BuildRecord;

/// SQLite store for saved builds, append-only and keyed by user identity.
/// All operations are synchronous (rusqlite is blocking).
/// Callers in async contexts should use `tokio::task::spawn_blocking`.
pub struct BuildHistory {
    conn: Connection,
}

impl BuildHistory {
    /// Create or open the history database at `db_path`.
    pub fn new(db_path: &Path) -> Result<Self, String> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create data dir: {}", e))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| format!("Failed to open history db: {}", e))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS build_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                bom_json TEXT NOT NULL,
                created_at TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| format!("Failed to create table: {}", e))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_history_user
             ON build_history(user_id, created_at DESC)",
            [],
        )
        .map_err(|e| format!("Failed to create user index: {}", e))?;

        info!("Opened build history database at {:?}", db_path);
        Ok(Self { conn })
    }

    /// Append a build for `user`. Returns the new entry id.
    pub fn save(&self, user: &str, name: &str, bom: &Bom) -> Result<i64, String> {
        let bom_json =
            serde_json::to_string(bom).map_err(|e| format!("Failed to serialize BOM: {}", e))?;
        let created_at = Utc::now().to_rfc3339();

        self.conn
            .execute(
                "INSERT INTO build_history (user_id, name, bom_json, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user, name, bom_json, created_at],
            )
            .map_err(|e| format!("Failed to insert build: {}", e))?;

        let id = self.conn.last_insert_rowid();
        info!("Saved build '{}' as entry {} for user {}", name, id, user);
        Ok(id)
    }

    /// All builds saved by `user`, newest first.
    pub fn list(&self, user: &str) -> Result<Vec<BuildRecord>, String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, bom_json, created_at
                 FROM build_history
                 WHERE user_id = ?1
                 ORDER BY created_at DESC, id DESC",
            )
            .map_err(|e| format!("Failed to prepare query: {}", e))?;

        let rows = stmt
            .query_map(params![user], |row| {
                let bom_json: String = row.get(2)?;
                let bom = serde_json::from_str(&bom_json)
                    .unwrap_or_else(|_| json!({"error": "invalid data"}));
                Ok(BuildRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    bom,
                    created_at: row.get(3)?,
                })
            })
            .map_err(|e| format!("Failed to query builds: {}", e))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to collect builds: {}", e))
    }
}
