//! ArtikelModel - CRUD accessors over `tb_artikel`

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::models::errors::AppResult;
use crate::models::types::{Artikel, ArtikelChanges, ArtikelListItem, NewArtikel};

const SELECT_ARTIKEL: &str = "SELECT id_artikel, id_kategori, judul_artikel, foto_artikel, \
     deskripsi_artikel, tags, slug, views, created_at FROM tb_artikel";

#[derive(Debug, Clone)]
pub struct ArtikelModel {
    pool: SqlitePool,
}

impl ArtikelModel {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find one article by primary key
    pub async fn find(&self, id: i64) -> AppResult<Option<Artikel>> {
        let artikel = sqlx::query_as::<_, Artikel>(&format!("{} WHERE id_artikel = ?", SELECT_ARTIKEL))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(artikel)
    }

    /// All articles, newest first, with their category name
    pub async fn find_all_latest(&self) -> AppResult<Vec<ArtikelListItem>> {
        let rows = sqlx::query_as::<_, ArtikelListItem>(
            "SELECT a.id_artikel, a.judul_artikel, a.foto_artikel, a.tags, a.slug, a.views, \
             a.created_at, k.nama_kategori \
             FROM tb_artikel a LEFT JOIN tb_kategori k ON k.id_kategori = a.id_kategori \
             ORDER BY a.created_at DESC, a.id_artikel DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new article; views always start at zero
    pub async fn save(&self, artikel: NewArtikel) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO tb_artikel \
             (id_kategori, judul_artikel, foto_artikel, deskripsi_artikel, tags, slug, views, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, 0, ?)",
        )
        .bind(artikel.id_kategori)
        .bind(artikel.judul_artikel)
        .bind(artikel.foto_artikel)
        .bind(artikel.deskripsi_artikel)
        .bind(artikel.tags)
        .bind(artikel.slug)
        .bind(artikel.created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id_artikel = id, "Artikel inserted");
        Ok(id)
    }

    /// Write only the collected fields. Returns false when no row matched
    /// or there was nothing to write.
    pub async fn update(&self, id: i64, changes: ArtikelChanges) -> AppResult<bool> {
        if changes.is_empty() {
            return Ok(false);
        }

        let ArtikelChanges {
            id_kategori,
            judul_artikel,
            foto_artikel,
            deskripsi_artikel,
            tags,
            slug,
        } = changes;

        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE tb_artikel SET ");
        let mut set = query.separated(", ");
        if let Some(value) = id_kategori {
            set.push("id_kategori = ").push_bind_unseparated(value);
        }
        if let Some(value) = judul_artikel {
            set.push("judul_artikel = ").push_bind_unseparated(value);
        }
        if let Some(value) = foto_artikel {
            set.push("foto_artikel = ").push_bind_unseparated(value);
        }
        if let Some(value) = deskripsi_artikel {
            set.push("deskripsi_artikel = ").push_bind_unseparated(value);
        }
        if let Some(value) = tags {
            set.push("tags = ").push_bind_unseparated(value);
        }
        if let Some(value) = slug {
            set.push("slug = ").push_bind_unseparated(value);
        }
        query.push(" WHERE id_artikel = ").push_bind(id);

        let result = query.build().execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete by primary key. Returns false when no row matched.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tb_artikel WHERE id_artikel = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
