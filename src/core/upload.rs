//! Uploaded image handling
//!
//! - MIME type is sniffed from the file's magic bytes, not trusted from the client
//! - Allow-list + size limit per upload form
//! - Files are stored as `{unix_ts}_{20 hex}.{ext}` so names never collide
//!   in practice and never carry user input

use axum::body::Bytes;
use image::ImageFormat;
use std::path::Path;
use tracing::{debug, info};

use crate::models::errors::{AppError, AppResult};

/// Upload rules for one form field
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    /// Accepted MIME types
    pub allowed_mime: &'static [&'static str],
    /// Maximum size in kilobytes
    pub max_kb: u64,
}

impl UploadPolicy {
    pub fn new(allowed_mime: &'static [&'static str], max_kb: u64) -> Self {
        Self {
            allowed_mime,
            max_kb,
        }
    }

    pub fn allows(&self, mime: &str) -> bool {
        self.allowed_mime.contains(&mime)
    }
}

/// A file received from a multipart form
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-side filename (display only)
    pub file_name: Option<String>,
    /// Client-declared content type (display only)
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl ImageUpload {
    pub fn new(file_name: Option<String>, content_type: Option<String>, bytes: Bytes) -> Self {
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Browsers send an empty part when no file was chosen
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Detected image format, if the bytes look like a known image
    pub fn sniff_format(&self) -> Option<ImageFormat> {
        image::guess_format(&self.bytes).ok()
    }

    /// Detected MIME type
    pub fn sniff_mime(&self) -> Option<&'static str> {
        self.sniff_format().map(|format| format.to_mime_type())
    }

    /// Check type and size against `policy`, returning the detected format
    pub fn validate(&self, policy: &UploadPolicy) -> AppResult<ImageFormat> {
        let format = self
            .sniff_format()
            .filter(|format| policy.allows(format.to_mime_type()))
            .ok_or_else(|| {
                let declared = self.content_type.as_deref().unwrap_or("unknown");
                AppError::invalid_file_type(self.sniff_mime().unwrap_or(declared))
            })?;

        if self.size() > policy.max_kb * 1024 {
            return Err(AppError::file_too_large(self.size().div_ceil(1024), policy.max_kb));
        }

        Ok(format)
    }

    /// Write the file into `dir` under a random name and return that name
    pub async fn store(&self, dir: &Path, format: ImageFormat) -> AppResult<String> {
        let name = random_name(extension(format));
        let path = dir.join(&name);
        tokio::fs::write(&path, &self.bytes)
            .await
            .map_err(|e| AppError::file_operation(format!("Cannot write {}", path.display()), e))?;

        info!(
            "💾 Stored upload {} as {} ({} bytes)",
            self.file_name.as_deref().unwrap_or("-"),
            name,
            self.size()
        );
        Ok(name)
    }
}

/// `{unix_ts}_{20 hex chars}.{ext}`
pub fn random_name(ext: &str) -> String {
    let random: [u8; 10] = rand::random();
    format!(
        "{}_{}.{}",
        chrono::Utc::now().timestamp(),
        hex::encode(random),
        ext
    )
}

fn extension(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("bin")
}

/// Remove a stored upload.
///
/// Returns `Ok(false)` when the name is empty or nothing exists at the path,
/// and an error when the path exists but cannot be removed.
pub async fn remove_stored(dir: &Path, name: &str) -> AppResult<bool> {
    if name.is_empty() || name.contains('/') || name.contains('\\') || name == ".." {
        return Ok(false);
    }

    let path = dir.join(name);
    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|e| AppError::file_operation(format!("Cannot stat {}", path.display()), e))?;
    if !exists {
        debug!("Nothing to remove at {}", path.display());
        return Ok(false);
    }

    tokio::fs::remove_file(&path)
        .await
        .map_err(|e| AppError::file_operation(format!("Cannot remove {}", path.display()), e))?;
    info!("🗑️ Removed upload {}", name);
    Ok(true)
}
