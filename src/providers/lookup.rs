//! LookupModel - the planner's select-box tables
//! (sosial media, content type, content pillar, status)

use sqlx::SqlitePool;

use crate::models::errors::AppResult;
use crate::models::types::{LookupItem, LookupKind};

#[derive(Debug, Clone)]
pub struct LookupModel {
    pool: SqlitePool,
}

impl LookupModel {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self, kind: LookupKind) -> AppResult<Vec<LookupItem>> {
        // Table and column names come from LookupKind, never from input
        let sql = format!(
            "SELECT id, {} AS nama FROM {} ORDER BY id",
            kind.name_column(),
            kind.table()
        );
        let rows = sqlx::query_as::<_, LookupItem>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Whether `nama` is one of the rows of `kind`
    pub async fn exists(&self, kind: LookupKind, nama: &str) -> AppResult<bool> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ?)",
            kind.table(),
            kind.name_column()
        );
        let (found,): (i64,) = sqlx::query_as(&sql)
            .bind(nama)
            .fetch_one(&self.pool)
            .await?;
        Ok(found != 0)
    }
}
