//! KategoriModel - read-only lookup over `tb_kategori`

use sqlx::SqlitePool;

use crate::models::errors::AppResult;
use crate::models::types::Kategori;

#[derive(Debug, Clone)]
pub struct KategoriModel {
    pool: SqlitePool,
}

impl KategoriModel {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_all(&self) -> AppResult<Vec<Kategori>> {
        let rows = sqlx::query_as::<_, Kategori>(
            "SELECT id_kategori, nama_kategori FROM tb_kategori ORDER BY id_kategori",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(&self, id: i64) -> AppResult<Option<Kategori>> {
        let row = sqlx::query_as::<_, Kategori>(
            "SELECT id_kategori, nama_kategori FROM tb_kategori WHERE id_kategori = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
