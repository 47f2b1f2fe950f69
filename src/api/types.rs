//! API Request/Response Types
//!
//! Multipart form parsing, validated form structs, flash-carrying redirects
//! and page rendering shared by the controllers.

use axum::{
    extract::Multipart,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use tera::Context;
use tracing::{debug, error, warn};
use validator::{Validate, ValidationError};

use crate::core::upload::ImageUpload;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{LookupItem, LookupKind};
use crate::utils::constants::POST_DATE_FORMAT;
use crate::utils::flash::{clear_cookie, flash_id, set_cookie, Flash, FlashStore};
use crate::utils::views::Views;

// ============================================
// Multipart form
// ============================================

/// Text fields and files of one multipart submission
#[derive(Debug, Default)]
pub struct FormData {
    /// Text fields, trimmed
    pub fields: HashMap<String, String>,
    /// Non-empty file parts
    pub files: HashMap<String, ImageUpload>,
}

impl FormData {
    /// Text value when present and non-empty
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Text value or empty string
    pub fn text_or_empty(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    pub fn file(&self, name: &str) -> Option<&ImageUpload> {
        self.files.get(name)
    }

    /// Submitted text input, kept for re-filling the form
    pub fn old_input(&self) -> HashMap<String, String> {
        self.fields.clone()
    }
}

/// Drain a multipart body into [`FormData`].
///
/// A part with a filename is a file; a file part without bytes means the
/// user chose nothing and is dropped.
pub async fn read_multipart(mut multipart: Multipart) -> AppResult<FormData> {
    let mut form = FormData::default();

    while let Some(field) = multipart.next_field().await? {
        let name = match field.name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => continue,
        };

        if field.file_name().is_some() {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await?;
            let upload = ImageUpload::new(file_name, content_type, bytes);
            if upload.is_empty() {
                debug!("Empty file part {}", name);
                continue;
            }
            form.files.insert(name, upload);
        } else {
            let value = field.text().await?;
            form.fields.insert(name, value.trim().to_string());
        }
    }

    Ok(form)
}

// ============================================
// Artikel forms
// ============================================

/// Input of `POST /admin/artikel/store` (the image is checked separately)
#[derive(Debug, Validate)]
pub struct StoreArtikelForm {
    #[validate(length(min = 1, message = "judul_artikel is required"))]
    pub judul_artikel: String,
    #[validate(custom(function = "validate_integer", message = "kategori must be an integer"))]
    pub kategori: String,
    #[validate(length(min = 1, message = "deskripsi_artikel is required"))]
    pub deskripsi_artikel: String,
    #[validate(length(min = 1, message = "tags is required"))]
    pub tags: String,
}

impl StoreArtikelForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            judul_artikel: form.text_or_empty("judul_artikel"),
            kategori: form.text_or_empty("kategori"),
            deskripsi_artikel: form.text_or_empty("deskripsi_artikel"),
            tags: form.text_or_empty("tags"),
        }
    }

    /// Validate and return the category id
    pub fn checked(&self) -> AppResult<i64> {
        self.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        parse_kategori(&self.kategori)
    }
}

/// Parse a category id field
pub fn parse_kategori(raw: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::validation(format!("kategori must be an integer, got {:?}", raw)))
}

fn validate_integer(value: &str) -> Result<(), ValidationError> {
    if value.parse::<i64>().is_err() {
        return Err(ValidationError::new("integer"));
    }
    Ok(())
}

// ============================================
// Content planner form
// ============================================

/// Input of `POST /content-planner/add`
#[derive(Debug, Validate)]
pub struct ContentPlannerForm {
    #[validate(length(min = 1, message = "sosial_media is required"))]
    pub sosial_media: String,
    #[validate(length(min = 1, message = "content_type is required"))]
    pub content_type: String,
    #[validate(length(min = 1, message = "content_pillar is required"))]
    pub content_pillar: String,
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
    pub caption: String,
    pub cta_link: String,
    pub hashtag: String,
    /// Post date, `YYYY-MM-DD`
    #[validate(custom(function = "validate_post_date", message = "created_at must be YYYY-MM-DD"))]
    pub created_at: String,
}

impl ContentPlannerForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            sosial_media: form.text_or_empty("sosial_media"),
            content_type: form.text_or_empty("content_type"),
            content_pillar: form.text_or_empty("content_pillar"),
            status: form.text_or_empty("status"),
            caption: form.text_or_empty("caption"),
            cta_link: form.text_or_empty("cta_link"),
            hashtag: form.text_or_empty("hashtag"),
            created_at: form.text_or_empty("created_at"),
        }
    }

    /// Validate and return the parsed post date
    pub fn checked(&self) -> AppResult<NaiveDate> {
        self.validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        NaiveDate::parse_from_str(&self.created_at, POST_DATE_FORMAT)
            .map_err(|_| AppError::validation("created_at must be YYYY-MM-DD"))
    }

    /// Submitted name for one lookup select
    pub fn selected(&self, kind: LookupKind) -> &str {
        match kind {
            LookupKind::SosialMedia => &self.sosial_media,
            LookupKind::ContentType => &self.content_type,
            LookupKind::ContentPillar => &self.content_pillar,
            LookupKind::Status => &self.status,
        }
    }
}

fn validate_post_date(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, POST_DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| ValidationError::new("date"))
}

/// One `<select>` on the planner page
#[derive(Debug, Serialize)]
pub struct SelectField {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<LookupItem>,
    pub selected: String,
}

// ============================================
// Redirects & pages
// ============================================

/// 303 redirect carrying a flash message
pub fn redirect_with(store: &FlashStore, to: &str, flash: Flash) -> Response {
    let id = store.put(flash);
    (
        AppendHeaders([(header::SET_COOKIE, set_cookie(&id))]),
        Redirect::to(to),
    )
        .into_response()
}

/// Path of the page that submitted the request (from `Referer`), or `fallback`.
///
/// Only a local absolute path is returned. `//host` and backslash paths would
/// send the browser to another origin.
pub fn back_location(headers: &HeaderMap, fallback: &str) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_string()))
        .filter(|path| is_local_path(path))
        .unwrap_or_else(|| fallback.to_string())
}

fn is_local_path(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.contains('\\')
}

/// Flash consumed by the page being rendered
#[derive(Debug, Default)]
pub struct PageFlash {
    pub flash: Option<Flash>,
    /// Request carried a flash cookie that should be cleared
    pub clear_cookie: bool,
}

impl PageFlash {
    pub fn from_headers(store: &FlashStore, headers: &HeaderMap) -> Self {
        match flash_id(headers) {
            Some(id) => Self {
                flash: store.take(&id),
                clear_cookie: true,
            },
            None => Self::default(),
        }
    }

    /// Old input value for `field`
    pub fn old(&self, field: &str) -> Option<&str> {
        self.flash
            .as_ref()
            .and_then(|flash| flash.old.get(field))
            .map(String::as_str)
    }
}

/// Render a page with the flash and old input in its context
pub fn render_page(
    views: &Views,
    name: &str,
    mut context: Context,
    page: PageFlash,
) -> AppResult<Response> {
    let old = page
        .flash
        .as_ref()
        .map(|flash| flash.old.clone())
        .unwrap_or_default();
    context.insert("flash", &page.flash);
    context.insert("old", &old);

    let html = Html(views.render(name, context)?);
    if page.clear_cookie {
        Ok((AppendHeaders([(header::SET_COOKIE, clear_cookie())]), html).into_response())
    } else {
        Ok(html.into_response())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(code = self.code_str(), "❌ {}", self);
        } else {
            warn!(code = self.code_str(), "⚠️ {}", self);
        }
        (status, self.message).into_response()
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        FormData {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            files: HashMap::new(),
        }
    }

    #[test]
    fn test_text_skips_empty() {
        let data = form(&[("judul_artikel", ""), ("tags", "rust")]);
        assert_eq!(data.text("judul_artikel"), None);
        assert_eq!(data.text("tags"), Some("rust"));
        assert_eq!(data.text("missing"), None);
    }

    #[test]
    fn test_store_form_valid() {
        let data = form(&[
            ("judul_artikel", "Halo"),
            ("kategori", "2"),
            ("deskripsi_artikel", "Isi"),
            ("tags", "a,b"),
        ]);
        assert_eq!(StoreArtikelForm::from_form(&data).checked().unwrap(), 2);
    }

    #[test]
    fn test_store_form_invalid() {
        let data = form(&[("judul_artikel", "Halo"), ("kategori", "dua")]);
        let err = StoreArtikelForm::from_form(&data).checked().unwrap_err();
        assert!(err.code.is_client_error());

        let data = form(&[
            ("kategori", "1"),
            ("deskripsi_artikel", "Isi"),
            ("tags", "a"),
        ]);
        assert!(StoreArtikelForm::from_form(&data).checked().is_err());
    }

    #[test]
    fn test_planner_form() {
        let mut data = form(&[
            ("sosial_media", "Instagram"),
            ("content_type", "Reels"),
            ("content_pillar", "Educational"),
            ("status", "Draft"),
            ("created_at", "2026-10-16"),
        ]);
        let parsed = ContentPlannerForm::from_form(&data);
        assert_eq!(
            parsed.checked().unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
        );
        assert_eq!(parsed.selected(LookupKind::ContentType), "Reels");
        assert_eq!(parsed.caption, "");

        data.fields.insert("created_at".into(), "16/10/2026".into());
        assert!(ContentPlannerForm::from_form(&data).checked().is_err());
    }

    #[test]
    fn test_back_location() {
        let mut headers = HeaderMap::new();
        assert_eq!(back_location(&headers, "/fallback"), "/fallback");

        headers.insert(
            header::REFERER,
            HeaderValue::from_static("http://localhost:8080/admin/artikel/edit/3?x=1"),
        );
        assert_eq!(back_location(&headers, "/fallback"), "/admin/artikel/edit/3?x=1");

        headers.insert(header::REFERER, HeaderValue::from_static("/content-planner"));
        assert_eq!(back_location(&headers, "/fallback"), "/content-planner");
    }

    #[test]
    fn test_back_location_stays_on_site() {
        let mut headers = HeaderMap::new();
        for referer in [
            "https://evil.example//evil.example/phish",
            "//evil.example/phish",
            "not a url",
        ] {
            headers.insert(header::REFERER, HeaderValue::from_static(referer));
            assert_eq!(back_location(&headers, "/fallback"), "/fallback", "{}", referer);
        }

        assert!(!is_local_path("/\\evil.example"));
        assert!(!is_local_path("//evil.example"));
        assert!(is_local_path("/admin/artikel/tambah"));
    }

    #[test]
    fn test_redirect_sets_flash_cookie() {
        let store = FlashStore::new();
        let response = redirect_with(&store, "/admin/artikel/index", Flash::success("ok"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/admin/artikel/index"
        );
        assert!(response.headers().contains_key(header::SET_COOKIE));
        assert_eq!(store.len(), 1);
    }
}
