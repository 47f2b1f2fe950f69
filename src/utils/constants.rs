//! Constants Module - Single Source of Truth
//!
//! Semua konstanta (route, pesan flash, batas upload, data awal) didefinisikan
//! di sini. Tidak ada hardcoded values di modul lain.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "Artikel Admin";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// CONFIG DEFAULTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://artikel.db?mode=rwc";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Maximum image size (KB)
pub const DEFAULT_MAX_IMAGE_KB: u64 = 2048;

/// Request body limit for multipart routes (bytes)
pub const MULTIPART_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Subdirectory (under the upload root) for article images
pub const ARTIKEL_UPLOAD_SUBDIR: &str = "upload_artikel";

/// Subdirectory (under the upload root) for content planner images
pub const CONTENT_UPLOAD_SUBDIR: &str = "upload_content";

// ============================================
// UPLOAD RULES
// ============================================

/// Allowed MIME types when creating an article (jpg files sniff as `image/jpeg`)
pub const ARTIKEL_STORE_MIME_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Allowed MIME types when replacing an article image
pub const ARTIKEL_UPDATE_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Allowed MIME types for content planner images
pub const CONTENT_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

// ============================================
// ROUTES
// ============================================

pub const ROUTE_ARTIKEL_INDEX: &str = "/admin/artikel/index";
pub const ROUTE_ARTIKEL_CREATE: &str = "/admin/artikel/tambah";
pub const ROUTE_CONTENT_PLANNER: &str = "/content-planner";

/// Public URL prefix for uploaded files
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

// ============================================
// FLASH
// ============================================

/// Cookie carrying the flash id
pub const FLASH_COOKIE: &str = "flash_id";

/// Flash entry TTL (seconds)
pub const FLASH_TTL_SECS: u64 = 300;

/// Interval between flash store cleanups (seconds)
pub const FLASH_CLEANUP_INTERVAL_SECS: u64 = 60;

// Pesan untuk user (ditampilkan sesudah redirect)
pub const MSG_VALIDATION_FAILED: &str = "Validasi gagal.";
pub const MSG_ARTIKEL_CREATED: &str = "Artikel berhasil ditambahkan.";
pub const MSG_ARTIKEL_UPDATED: &str = "Artikel berhasil diperbarui.";
pub const MSG_ARTIKEL_DELETED: &str = "Artikel berhasil dihapus.";
pub const MSG_ARTIKEL_NOT_FOUND: &str = "Artikel tidak ditemukan.";
pub const MSG_FILE_TYPE_NOT_ALLOWED: &str = "Format file tidak diizinkan.";
pub const MSG_NOTHING_CHANGED: &str = "Tidak ada data yang diubah.";
pub const MSG_IMAGE_DELETE_FAILED: &str = "Gagal menghapus file gambar.";
pub const MSG_ARTIKEL_DELETE_FAILED: &str = "Gagal menghapus artikel.";
pub const MSG_SAVE_FAILED: &str = "Gagal menyimpan data.";
pub const MSG_CONTENT_PLANNER_CREATED: &str = "Content planner berhasil ditambahkan.";

// ============================================
// SEED DATA
// ============================================

pub const DEFAULT_KATEGORI: [&str; 4] = ["Berita", "Tips & Trik", "Edukasi", "Promo"];
pub const DEFAULT_SOSIAL_MEDIA: [&str; 5] = ["Instagram", "TikTok", "Facebook", "X", "YouTube"];
pub const DEFAULT_CONTENT_TYPES: [&str; 4] = ["Feed", "Reels", "Story", "Carousel"];
pub const DEFAULT_CONTENT_PILLARS: [&str; 4] = ["Educational", "Entertainment", "Promotional", "Engagement"];
pub const DEFAULT_STATUSES: [&str; 4] = ["Draft", "Scheduled", "Posted", "Cancelled"];

// ============================================
// FORMATS
// ============================================

/// Slug date suffix (ddmmyyyy)
pub const SLUG_DATE_FORMAT: &str = "%d%m%Y";

/// Content planner post date input (YYYY-MM-DD)
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Indonesian month names for display dates
pub const BULAN: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni",
    "Juli", "Agustus", "September", "Oktober", "November", "Desember",
];
