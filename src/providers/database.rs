//! Database Module - SQLite pool, schema bootstrap and seed data
//!
//! Semua tabel dibuat dengan `CREATE TABLE IF NOT EXISTS`, dan data lookup
//! diisi sekali dengan `INSERT OR IGNORE` sehingga start ulang aman.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::LookupKind;
use crate::utils::constants::{
    DEFAULT_CONTENT_PILLARS, DEFAULT_CONTENT_TYPES, DEFAULT_KATEGORI, DEFAULT_SOSIAL_MEDIA,
    DEFAULT_STATUSES,
};

/// Max pooled connections for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

const SCHEMA: [&str; 7] = [
    r#"CREATE TABLE IF NOT EXISTS tb_kategori (
        id_kategori INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_kategori TEXT NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tb_artikel (
        id_artikel INTEGER PRIMARY KEY AUTOINCREMENT,
        id_kategori INTEGER NOT NULL REFERENCES tb_kategori(id_kategori),
        judul_artikel TEXT NOT NULL,
        foto_artikel TEXT NOT NULL,
        deskripsi_artikel TEXT NOT NULL,
        tags TEXT NOT NULL,
        slug TEXT NOT NULL,
        views INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tb_sosial_media (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_sosial_media TEXT NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tb_content_type (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_content_type TEXT NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tb_content_pillar (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_content_pillar TEXT NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tb_status (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        nama_status TEXT NOT NULL UNIQUE
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tb_content_planner (
        id_content_planner INTEGER PRIMARY KEY AUTOINCREMENT,
        sosial_media TEXT NOT NULL,
        content_type TEXT NOT NULL,
        content_pillar TEXT NOT NULL,
        status TEXT NOT NULL,
        caption TEXT NOT NULL DEFAULT '',
        cta_link TEXT NOT NULL DEFAULT '',
        hashtag TEXT NOT NULL DEFAULT '',
        post_date TEXT NOT NULL,
        file_content TEXT,
        created_at TEXT NOT NULL
    )"#,
];

/// Handle to the SQLite database
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to a database URL (e.g. `sqlite://artikel.db?mode=rwc`)
    pub async fn connect(url: &str) -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                AppError::with_source(ErrorCode::ConfigInvalidValue, "Invalid DATABASE_URL", e)
            })?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        info!("🗄️ Connected to database");
        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// Every SQLite `:memory:` connection is its own database, so the pool is
    /// pinned to a single connection that never expires.
    pub async fn in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Create missing tables and seed lookup data
    pub async fn init(&self) -> AppResult<()> {
        self.migrate().await?;
        self.seed().await
    }

    /// Create missing tables
    pub async fn migrate(&self) -> AppResult<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        debug!("Schema ready ({} tables)", SCHEMA.len());
        Ok(())
    }

    /// Insert default categories and planner lookups (idempotent)
    pub async fn seed(&self) -> AppResult<()> {
        for nama in DEFAULT_KATEGORI {
            sqlx::query("INSERT OR IGNORE INTO tb_kategori (nama_kategori) VALUES (?)")
                .bind(nama)
                .execute(&self.pool)
                .await?;
        }

        let lookups = [
            (LookupKind::SosialMedia, &DEFAULT_SOSIAL_MEDIA[..]),
            (LookupKind::ContentType, &DEFAULT_CONTENT_TYPES[..]),
            (LookupKind::ContentPillar, &DEFAULT_CONTENT_PILLARS[..]),
            (LookupKind::Status, &DEFAULT_STATUSES[..]),
        ];

        for (kind, names) in lookups {
            let sql = format!(
                "INSERT OR IGNORE INTO {} ({}) VALUES (?)",
                kind.table(),
                kind.name_column()
            );
            for nama in names {
                sqlx::query(&sql).bind(*nama).execute(&self.pool).await?;
            }
        }

        Ok(())
    }

    /// Shared connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all pooled connections
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
