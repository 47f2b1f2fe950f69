//! Type definitions for articles, categories and the content planner
//! Row types map 1:1 onto the SQLite tables.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::constants::BULAN;

// ============================================
// Artikel
// ============================================

/// Row of `tb_artikel`
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Artikel {
    pub id_artikel: i64,
    pub id_kategori: i64,
    pub judul_artikel: String,
    pub foto_artikel: String,
    pub deskripsi_artikel: String,
    pub tags: String,
    pub slug: String,
    pub views: i64,
    pub created_at: NaiveDateTime,
}

/// Artikel joined with its category name, for the index page
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ArtikelListItem {
    pub id_artikel: i64,
    pub judul_artikel: String,
    pub foto_artikel: String,
    pub tags: String,
    pub slug: String,
    pub views: i64,
    pub created_at: NaiveDateTime,
    pub nama_kategori: Option<String>,
}

/// Values for a new article row
#[derive(Debug, Clone)]
pub struct NewArtikel {
    pub id_kategori: i64,
    pub judul_artikel: String,
    pub foto_artikel: String,
    pub deskripsi_artikel: String,
    pub tags: String,
    pub slug: String,
    pub created_at: NaiveDateTime,
}

/// Partial update: only `Some` fields are written
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtikelChanges {
    pub id_kategori: Option<i64>,
    pub judul_artikel: Option<String>,
    pub foto_artikel: Option<String>,
    pub deskripsi_artikel: Option<String>,
    pub tags: Option<String>,
    pub slug: Option<String>,
}

impl ArtikelChanges {
    /// True when no field was collected
    pub fn is_empty(&self) -> bool {
        self.id_kategori.is_none()
            && self.judul_artikel.is_none()
            && self.foto_artikel.is_none()
            && self.deskripsi_artikel.is_none()
            && self.tags.is_none()
            && self.slug.is_none()
    }
}

// ============================================
// Kategori
// ============================================

/// Row of `tb_kategori`
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct Kategori {
    pub id_kategori: i64,
    pub nama_kategori: String,
}

// ============================================
// Content Planner lookups
// ============================================

/// The four lookup tables behind the planner's select boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    SosialMedia,
    ContentType,
    ContentPillar,
    Status,
}

impl LookupKind {
    pub const ALL: [LookupKind; 4] = [
        LookupKind::SosialMedia,
        LookupKind::ContentType,
        LookupKind::ContentPillar,
        LookupKind::Status,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            LookupKind::SosialMedia => "tb_sosial_media",
            LookupKind::ContentType => "tb_content_type",
            LookupKind::ContentPillar => "tb_content_pillar",
            LookupKind::Status => "tb_status",
        }
    }

    /// Name column of the lookup table
    pub fn name_column(&self) -> &'static str {
        match self {
            LookupKind::SosialMedia => "nama_sosial_media",
            LookupKind::ContentType => "nama_content_type",
            LookupKind::ContentPillar => "nama_content_pillar",
            LookupKind::Status => "nama_status",
        }
    }

    /// Form field carrying the selected name
    pub fn form_field(&self) -> &'static str {
        match self {
            LookupKind::SosialMedia => "sosial_media",
            LookupKind::ContentType => "content_type",
            LookupKind::ContentPillar => "content_pillar",
            LookupKind::Status => "status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LookupKind::SosialMedia => "Social Media",
            LookupKind::ContentType => "Content Type",
            LookupKind::ContentPillar => "Content Pillar",
            LookupKind::Status => "Status",
        }
    }
}

/// One lookup row (id + display name)
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct LookupItem {
    pub id: i64,
    pub nama: String,
}

// ============================================
// Content Planner entry
// ============================================

/// Row of `tb_content_planner`
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContentPlannerEntry {
    pub id_content_planner: i64,
    pub sosial_media: String,
    pub content_type: String,
    pub content_pillar: String,
    pub status: String,
    pub caption: String,
    pub cta_link: String,
    pub hashtag: String,
    pub post_date: NaiveDate,
    pub file_content: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Values for a new planner entry
#[derive(Debug, Clone)]
pub struct NewContentPlannerEntry {
    pub sosial_media: String,
    pub content_type: String,
    pub content_pillar: String,
    pub status: String,
    pub caption: String,
    pub cta_link: String,
    pub hashtag: String,
    pub post_date: NaiveDate,
    pub file_content: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Format a date the Indonesian long way, e.g. `16 Oktober 2026`
pub fn tanggal_indonesia(date: NaiveDate) -> String {
    use chrono::Datelike;
    let bulan = BULAN[date.month0() as usize];
    format!("{:02} {} {}", date.day(), bulan, date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changes() {
        assert!(ArtikelChanges::default().is_empty());
        let changes = ArtikelChanges {
            tags: Some("rust".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_tanggal_indonesia() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(tanggal_indonesia(date), "16 Oktober 2026");
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(tanggal_indonesia(date), "05 Januari 2024");
    }

    #[test]
    fn test_lookup_kind_columns() {
        for kind in LookupKind::ALL {
            assert!(kind.table().starts_with("tb_"));
            assert!(kind.name_column().starts_with("nama_"));
            assert!(kind.name_column().ends_with(kind.form_field()));
        }
    }
}
