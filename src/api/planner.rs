//! Content planner controller

use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::Response,
};
use chrono::Local;
use std::sync::Arc;
use tera::Context;
use tracing::{error, info, warn};

use super::handlers::{discard_upload, AppState};
use super::types::*;
use crate::core::upload::UploadPolicy;
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{LookupKind, NewContentPlannerEntry};
use crate::utils::constants::{
    CONTENT_MIME_TYPES, MSG_CONTENT_PLANNER_CREATED, MSG_SAVE_FAILED, MSG_VALIDATION_FAILED,
    POST_DATE_FORMAT, ROUTE_CONTENT_PLANNER,
};
use crate::utils::flash::Flash;
use crate::utils::views::VIEW_CONTENT_PLANNER;

/// `GET /content-planner`
pub async fn index(State(state): State<Arc<AppState>>, headers: HeaderMap) -> AppResult<Response> {
    let page = PageFlash::from_headers(&state.flash, &headers);

    let mut selects = Vec::with_capacity(LookupKind::ALL.len());
    for kind in LookupKind::ALL {
        selects.push(SelectField {
            field: kind.form_field(),
            label: kind.label(),
            options: state.lookup.find_all(kind).await?,
            selected: page.old(kind.form_field()).unwrap_or_default().to_string(),
        });
    }
    let entries = state.planner.find_all().await?;
    let today = Local::now().date_naive().format(POST_DATE_FORMAT).to_string();

    let mut context = Context::new();
    context.insert("selects", &selects);
    context.insert("entries", &entries);
    context.insert("today", &today);
    render_page(&state.views, VIEW_CONTENT_PLANNER, context, page)
}

/// `POST /content-planner/add`
pub async fn add(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Response {
    let back = back_location(&headers, ROUTE_CONTENT_PLANNER);

    let form = match read_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => {
            warn!(code = e.code_str(), "⚠️ Planner: {}", e);
            return state.redirect(&back, Flash::error(MSG_VALIDATION_FAILED));
        }
    };

    match save_entry(&state, &form).await {
        Ok(id) => {
            info!("📅 Content planner {} created", id);
            state.redirect(ROUTE_CONTENT_PLANNER, Flash::success(MSG_CONTENT_PLANNER_CREATED))
        }
        Err(e) if e.code.is_client_error() => {
            warn!(code = e.code_str(), "⚠️ Planner rejected: {}", e);
            state.redirect(
                &back,
                Flash::error(MSG_VALIDATION_FAILED).with_input(form.old_input()),
            )
        }
        Err(e) => {
            error!(code = e.code_str(), "❌ Planner save failed: {}", e);
            state.redirect(&back, Flash::error(MSG_SAVE_FAILED).with_input(form.old_input()))
        }
    }
}

async fn save_entry(state: &AppState, form: &FormData) -> AppResult<i64> {
    let input = ContentPlannerForm::from_form(form);
    let post_date = input.checked()?;

    for kind in LookupKind::ALL {
        let nama = input.selected(kind);
        if !state.lookup.exists(kind, nama).await? {
            return Err(AppError::validation(format!(
                "{} {:?} is not a known option",
                kind.form_field(),
                nama
            )));
        }
    }

    let policy = UploadPolicy::new(&CONTENT_MIME_TYPES, state.config.max_image_kb);
    let image = match form.file("file_content") {
        Some(file) => Some((file, file.validate(&policy)?)),
        None => None,
    };

    let dir = state.config.content_upload_dir();
    let file_content = match image {
        Some((file, format)) => Some(file.store(&dir, format).await?),
        None => None,
    };

    let entry = NewContentPlannerEntry {
        sosial_media: input.sosial_media,
        content_type: input.content_type,
        content_pillar: input.content_pillar,
        status: input.status,
        caption: input.caption,
        cta_link: input.cta_link,
        hashtag: input.hashtag,
        post_date,
        file_content: file_content.clone(),
        created_at: Local::now().naive_local(),
    };

    match state.planner.save(entry).await {
        Ok(id) => Ok(id),
        Err(e) => {
            if let Some(name) = file_content {
                discard_upload(&dir, &name).await;
            }
            Err(e)
        }
    }
}
