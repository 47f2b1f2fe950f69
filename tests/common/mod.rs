//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use artikel_admin::api::{create_router, AppState};
use artikel_admin::models::AppConfig;
use artikel_admin::providers::Database;
use artikel_admin::utils::flash::Flash;
use axum::{
    body::Body,
    http::{header, Request, Response},
};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
pub const GIF_HEADER: &[u8] = b"GIF89a\x01\0\x01\0\0\0\0";

/// Router state backed by an in-memory database and a temporary upload root
pub struct TestApp {
    pub state: Arc<AppState>,
    upload_root: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let upload_root = tempfile::tempdir().unwrap();
        let config = AppConfig {
            upload_dir: upload_root.path().to_path_buf(),
            ..AppConfig::default()
        };
        config.ensure_upload_dirs().unwrap();

        let db = Database::in_memory().await.unwrap();
        db.init().await.unwrap();

        Self {
            state: Arc::new(AppState::new(config, db).unwrap()),
            upload_root,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        create_router(self.state.clone())
            .oneshot(request)
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_empty(&self, uri: &str) -> Response<Body> {
        self.send(Request::post(uri).body(Body::empty()).unwrap())
            .await
    }

    /// Consume the flash referenced by a redirect's `Set-Cookie`
    pub fn take_flash(&self, response: &Response<Body>) -> Flash {
        let id = flash_cookie(response).expect("response sets a flash cookie");
        self.state.flash.take(&id).expect("flash is stored")
    }

    pub fn artikel_dir(&self) -> PathBuf {
        self.upload_root.path().join("upload_artikel")
    }

    pub fn content_dir(&self) -> PathBuf {
        self.upload_root.path().join("upload_content")
    }

    /// Sorted file names in an upload directory
    pub fn files_in(&self, dir: PathBuf) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Flash id from a `Set-Cookie: flash_id=...` header
pub fn flash_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .filter_map(|pair| pair.strip_prefix("flash_id="))
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// PNG magic bytes padded to `size` bytes
pub fn png_of_size(size: usize) -> Vec<u8> {
    let mut bytes = PNG_HEADER.to_vec();
    bytes.resize(size, 0);
    bytes
}

// ============================================
// Multipart request builder
// ============================================

const BOUNDARY: &str = "artikel-admin-test-boundary";

#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
    referer: Option<String>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: {}\r\n\r\n",
                BOUNDARY, name, file_name, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Page the form was submitted from
    pub fn referer(mut self, url: &str) -> Self {
        self.referer = Some(url.to_string());
        self
    }

    pub fn into_request(mut self, uri: &str) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        let mut builder = Request::post(uri).header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
        if let Some(referer) = self.referer {
            builder = builder.header(header::REFERER, referer);
        }
        builder.body(Body::from(self.body)).unwrap()
    }
}

/// A complete, valid article form
pub fn artikel_form(judul: &str) -> MultipartBody {
    MultipartBody::new()
        .text("judul_artikel", judul)
        .text("kategori", "1")
        .text("deskripsi_artikel", "Isi artikel")
        .text("tags", "rust,axum")
        .file("foto_artikel", "foto.png", "image/png", PNG_HEADER)
}
