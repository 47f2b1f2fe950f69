//! API Request Handlers
//!
//! Shared state, health check and the artikel admin controller.
//! Every failure in a form submission ends as a redirect with a flash
//! message; only page rendering failures become error responses.

use axum::{
    extract::{Json, Multipart, Path, State},
    http::HeaderMap,
    response::Response,
};
use chrono::Local;
use std::sync::Arc;
use std::time::Instant;
use tera::Context;
use tracing::{error, info, warn};

use super::types::*;
use crate::core::slug::artikel_slug;
use crate::core::upload::{remove_stored, UploadPolicy};
use crate::models::config::AppConfig;
use crate::models::errors::{AppError, AppResult, ErrorCode};
use crate::models::types::{ArtikelChanges, NewArtikel};
use crate::providers::artikel::ArtikelModel;
use crate::providers::database::Database;
use crate::providers::kategori::KategoriModel;
use crate::providers::lookup::LookupModel;
use crate::providers::planner::ContentPlannerModel;
use crate::utils::constants::*;
use crate::utils::flash::{Flash, FlashStore};
use crate::utils::views::{Views, VIEW_ARTIKEL_CREATE, VIEW_ARTIKEL_EDIT, VIEW_ARTIKEL_INDEX};

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub artikel: ArtikelModel,
    pub kategori: KategoriModel,
    pub lookup: LookupModel,
    pub planner: ContentPlannerModel,
    pub views: Views,
    pub flash: FlashStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, db: Database) -> AppResult<Self> {
        let pool = db.pool().clone();
        Ok(Self {
            config,
            artikel: ArtikelModel::new(pool.clone()),
            kategori: KategoriModel::new(pool.clone()),
            lookup: LookupModel::new(pool.clone()),
            planner: ContentPlannerModel::new(pool),
            db,
            views: Views::new()?,
            flash: FlashStore::new(),
            start_time: Instant::now(),
        })
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub(crate) fn redirect(&self, to: &str, flash: Flash) -> Response {
        redirect_with(&self.flash, to, flash)
    }
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    Json(HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
    })
}

// ============================================
// Artikel: pages
// ============================================

/// `GET /admin/artikel/index`
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> AppResult<Response> {
    let page = PageFlash::from_headers(&state.flash, &headers);
    let all_data_artikel = state.artikel.find_all_latest().await?;

    let mut context = Context::new();
    context.insert("all_data_artikel", &all_data_artikel);
    render_page(&state.views, VIEW_ARTIKEL_INDEX, context, page)
}

/// `GET /admin/artikel/tambah`
pub async fn create(State(state): State<Arc<AppState>>, headers: HeaderMap) -> AppResult<Response> {
    let page = PageFlash::from_headers(&state.flash, &headers);
    let kategori = state.kategori.find_all().await?;

    let mut context = Context::new();
    context.insert("kategori", &kategori);
    context.insert("selected_kategori", page.old("kategori").unwrap_or_default());
    render_page(&state.views, VIEW_ARTIKEL_CREATE, context, page)
}

/// `GET /admin/artikel/edit/:id`
pub async fn edit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let Some(artikel) = state.artikel.find(id).await? else {
        warn!("⚠️ Edit: artikel {} not found", id);
        return Ok(state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_ARTIKEL_NOT_FOUND)));
    };

    let page = PageFlash::from_headers(&state.flash, &headers);
    let kategori = state.kategori.find_all().await?;

    let mut context = Context::new();
    context.insert("selected_kategori", &artikel.id_kategori.to_string());
    context.insert("artikel", &artikel);
    context.insert("kategori", &kategori);
    render_page(&state.views, VIEW_ARTIKEL_EDIT, context, page)
}

// ============================================
// Artikel: store
// ============================================

/// `POST /admin/artikel/store`
pub async fn store(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let back = back_location(&headers, ROUTE_ARTIKEL_CREATE);

    let form = match read_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(code = e.code_str(), "⚠️ Store: {}", e);
            return state.redirect(&back, Flash::error(MSG_VALIDATION_FAILED));
        }
    };

    match store_artikel(&state, &form).await {
        Ok(id) => {
            info!("📝 Artikel {} created", id);
            state.redirect(ROUTE_ARTIKEL_INDEX, Flash::success(MSG_ARTIKEL_CREATED))
        }
        Err(e) if e.code.is_client_error() => {
            warn!(code = e.code_str(), "⚠️ Store rejected: {}", e);
            state.redirect(
                &back,
                Flash::error(MSG_VALIDATION_FAILED).with_input(form.old_input()),
            )
        }
        Err(e) => {
            error!(code = e.code_str(), "❌ Store failed: {}", e);
            state.redirect(&back, Flash::error(MSG_SAVE_FAILED).with_input(form.old_input()))
        }
    }
}

async fn store_artikel(state: &AppState, form: &FormData) -> AppResult<i64> {
    let input = StoreArtikelForm::from_form(form);
    let id_kategori = input.checked()?;
    if state.kategori.find(id_kategori).await?.is_none() {
        return Err(AppError::validation(format!("kategori {} does not exist", id_kategori)));
    }

    let foto = form
        .file("foto_artikel")
        .ok_or_else(|| AppError::validation("foto_artikel is required"))?;
    let policy = UploadPolicy::new(&ARTIKEL_STORE_MIME_TYPES, state.config.max_image_kb);
    let format = foto.validate(&policy)?;

    let dir = state.config.artikel_upload_dir();
    let foto_artikel = foto.store(&dir, format).await?;

    let now = Local::now().naive_local();
    let artikel = NewArtikel {
        id_kategori,
        slug: artikel_slug(&input.judul_artikel, now.date()),
        judul_artikel: input.judul_artikel,
        foto_artikel: foto_artikel.clone(),
        deskripsi_artikel: input.deskripsi_artikel,
        tags: input.tags,
        created_at: now,
    };

    match state.artikel.save(artikel).await {
        Ok(id) => Ok(id),
        Err(e) => {
            discard_upload(&dir, &foto_artikel).await;
            Err(e)
        }
    }
}

// ============================================
// Artikel: update
// ============================================

enum UpdateOutcome {
    Updated,
    NothingChanged,
}

/// `POST /admin/artikel/update/:id`
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let back = back_location(&headers, &format!("/admin/artikel/edit/{}", id));

    let form = match read_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(code = e.code_str(), "⚠️ Update {}: {}", id, e);
            return state.redirect(&back, Flash::error(MSG_VALIDATION_FAILED));
        }
    };

    match update_artikel(&state, id, &form).await {
        Ok(UpdateOutcome::Updated) => {
            info!("✏️ Artikel {} updated", id);
            state.redirect(ROUTE_ARTIKEL_INDEX, Flash::success(MSG_ARTIKEL_UPDATED))
        }
        Ok(UpdateOutcome::NothingChanged) => {
            state.redirect(&back, Flash::error(MSG_NOTHING_CHANGED))
        }
        Err(e) => {
            let message = match e.code {
                ErrorCode::NotFound => {
                    warn!("⚠️ Update: artikel {} not found", id);
                    return state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_ARTIKEL_NOT_FOUND));
                }
                ErrorCode::InvalidFileType => MSG_FILE_TYPE_NOT_ALLOWED,
                code if code.is_client_error() => MSG_VALIDATION_FAILED,
                _ => MSG_SAVE_FAILED,
            };
            if e.code.is_client_error() {
                warn!(code = e.code_str(), "⚠️ Update {} rejected: {}", id, e);
            } else {
                error!(code = e.code_str(), "❌ Update {} failed: {}", id, e);
            }
            state.redirect(&back, Flash::error(message))
        }
    }
}

async fn update_artikel(state: &AppState, id: i64, form: &FormData) -> AppResult<UpdateOutcome> {
    let current = state
        .artikel
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("artikel {}", id)))?;

    // Check the image before anything is written
    let policy = UploadPolicy::new(&ARTIKEL_UPDATE_MIME_TYPES, state.config.max_image_kb);
    let image = match form.file("foto_artikel") {
        Some(file) => Some((file, file.validate(&policy)?)),
        None => None,
    };

    let mut changes = ArtikelChanges::default();
    if let Some(raw) = form.text("id_kategori") {
        let id_kategori = parse_kategori(raw)?;
        if state.kategori.find(id_kategori).await?.is_none() {
            return Err(AppError::validation(format!("kategori {} does not exist", id_kategori)));
        }
        changes.id_kategori = Some(id_kategori);
    }
    changes.judul_artikel = form.text("judul_artikel").map(str::to_string);
    changes.deskripsi_artikel = form.text("deskripsi_artikel").map(str::to_string);
    changes.tags = form.text("tags").map(str::to_string);

    if changes.is_empty() && image.is_none() {
        return Ok(UpdateOutcome::NothingChanged);
    }

    let dir = state.config.artikel_upload_dir();
    if let Some((file, format)) = image {
        changes.foto_artikel = Some(file.store(&dir, format).await?);
    }

    let judul = changes
        .judul_artikel
        .as_deref()
        .unwrap_or(&current.judul_artikel);
    changes.slug = Some(artikel_slug(judul, Local::now().date_naive()));

    let new_foto = changes.foto_artikel.clone();
    let updated = state.artikel.update(id, changes).await;

    match (updated, new_foto) {
        (Ok(true), Some(_)) => {
            // Old image is replaced; losing it is not worth failing the update
            if let Err(e) = remove_stored(&dir, &current.foto_artikel).await {
                warn!(code = e.code_str(), "⚠️ Old image {} kept: {}", current.foto_artikel, e);
            }
            Ok(UpdateOutcome::Updated)
        }
        (Ok(true), None) => Ok(UpdateOutcome::Updated),
        (Ok(false), new_foto) => {
            if let Some(name) = new_foto {
                discard_upload(&dir, &name).await;
            }
            Err(AppError::not_found(format!("artikel {}", id)))
        }
        (Err(e), new_foto) => {
            if let Some(name) = new_foto {
                discard_upload(&dir, &name).await;
            }
            Err(e)
        }
    }
}

// ============================================
// Artikel: delete
// ============================================

/// `POST /admin/artikel/delete/:id`
///
/// The image goes first, then the row. The two steps are not atomic: a
/// failed row delete leaves the article without its image.
pub async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Response {
    let artikel = match state.artikel.find(id).await {
        Ok(Some(artikel)) => artikel,
        Ok(None) => {
            warn!("⚠️ Delete: artikel {} not found", id);
            return state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_ARTIKEL_NOT_FOUND));
        }
        Err(e) => {
            error!(code = e.code_str(), "❌ Delete {}: {}", id, e);
            return state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_ARTIKEL_DELETE_FAILED));
        }
    };

    let dir = state.config.artikel_upload_dir();
    if let Err(e) = remove_stored(&dir, &artikel.foto_artikel).await {
        error!(code = e.code_str(), "❌ Delete {}: {}", id, e);
        return state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_IMAGE_DELETE_FAILED));
    }

    match state.artikel.delete(id).await {
        Ok(true) => {
            info!("🗑️ Artikel {} deleted", id);
            state.redirect(ROUTE_ARTIKEL_INDEX, Flash::success(MSG_ARTIKEL_DELETED))
        }
        Ok(false) => {
            warn!("⚠️ Delete {}: no row removed", id);
            state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_ARTIKEL_DELETE_FAILED))
        }
        Err(e) => {
            error!(code = e.code_str(), "❌ Delete {}: {}", id, e);
            state.redirect(ROUTE_ARTIKEL_INDEX, Flash::error(MSG_ARTIKEL_DELETE_FAILED))
        }
    }
}

/// Remove a file written earlier in a request that failed afterwards
pub(crate) async fn discard_upload(dir: &std::path::Path, name: &str) {
    if let Err(e) = remove_stored(dir, name).await {
        warn!(code = e.code_str(), "⚠️ Orphan upload {} left behind: {}", name, e);
    }
}
