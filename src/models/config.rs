//! Configuration module for the admin server
//!
//! Semua nilai bisa diatur lewat environment variable (atau file `.env`).
//! Default values live in `utils::constants`.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

use super::errors::{AppError, AppResult};
use crate::utils::constants::{
    ARTIKEL_UPLOAD_SUBDIR, CONTENT_UPLOAD_SUBDIR, DEFAULT_DATABASE_URL, DEFAULT_HOST,
    DEFAULT_MAX_IMAGE_KB, DEFAULT_PORT, DEFAULT_UPLOAD_DIR,
};

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// SQLx connection URL
    pub database_url: String,
    /// Root directory for uploaded images
    pub upload_dir: PathBuf,
    /// Maximum accepted image size in kilobytes
    pub max_image_kb: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_image_kb: DEFAULT_MAX_IMAGE_KB,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// Environment:
    ///   ARTIKEL_HOST  - Server host (default: 0.0.0.0)
    ///   PORT / ARTIKEL_PORT - Server port (default: 8080)
    ///   DATABASE_URL  - SQLite URL (default: sqlite://artikel.db?mode=rwc)
    ///   UPLOAD_DIR    - Upload root (default: uploads)
    ///   MAX_IMAGE_KB  - Image size limit (default: 2048)
    pub fn from_env() -> AppResult<Self> {
        // A missing .env file is fine
        if let Ok(path) = dotenvy::dotenv() {
            info!("📄 Loaded environment from {}", path.display());
        }

        let defaults = Self::default();

        let host = std::env::var("ARTIKEL_HOST").unwrap_or(defaults.host);

        // Hosting platforms set PORT, ARTIKEL_PORT is for local dev
        let port = match std::env::var("PORT").or_else(|_| std::env::var("ARTIKEL_PORT")) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::invalid_config("PORT", &raw))?,
            Err(_) => defaults.port,
        };

        let database_url = std::env::var("DATABASE_URL").unwrap_or(defaults.database_url);

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_dir);

        let max_image_kb = match std::env::var("MAX_IMAGE_KB") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(kb) if kb > 0 => kb,
                _ => return Err(AppError::invalid_config("MAX_IMAGE_KB", &raw)),
            },
            Err(_) => defaults.max_image_kb,
        };

        Ok(Self {
            host,
            port,
            database_url,
            upload_dir,
            max_image_kb,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> AppResult<SocketAddr> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse()
            .map_err(|_| AppError::invalid_config("ARTIKEL_HOST", &raw))
    }

    /// Directory for article images
    pub fn artikel_upload_dir(&self) -> PathBuf {
        self.upload_dir.join(ARTIKEL_UPLOAD_SUBDIR)
    }

    /// Directory for content planner images
    pub fn content_upload_dir(&self) -> PathBuf {
        self.upload_dir.join(CONTENT_UPLOAD_SUBDIR)
    }

    /// Create the upload directories if they do not exist yet
    pub fn ensure_upload_dirs(&self) -> AppResult<()> {
        for dir in [self.artikel_upload_dir(), self.content_upload_dir()] {
            create_dir(&dir)?;
        }
        Ok(())
    }
}

fn create_dir(dir: &Path) -> AppResult<()> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::file_operation(format!("Cannot create {}", dir.display()), e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_upload_dirs() {
        let config = AppConfig::default();
        assert_eq!(
            config.artikel_upload_dir(),
            PathBuf::from("uploads").join("upload_artikel")
        );
        assert_eq!(
            config.content_upload_dir(),
            PathBuf::from("uploads").join("upload_content")
        );
    }

    #[test]
    fn test_bind_addr() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..AppConfig::default()
        };
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = AppConfig {
            host: "not a host".to_string(),
            ..AppConfig::default()
        };
        assert!(bad.bind_addr().is_err());
    }

    #[test]
    fn test_ensure_upload_dirs() {
        let root = tempfile::tempdir().unwrap();
        let config = AppConfig {
            upload_dir: root.path().to_path_buf(),
            ..AppConfig::default()
        };
        config.ensure_upload_dirs().unwrap();
        assert!(config.artikel_upload_dir().is_dir());
        assert!(config.content_upload_dir().is_dir());
    }
}
