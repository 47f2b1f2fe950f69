//! Route Configuration

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use super::handlers::{self, AppState};
use super::middleware::logging_middleware;
use super::planner;
use crate::utils::constants::{MULTIPART_BODY_LIMIT, ROUTE_ARTIKEL_INDEX, UPLOADS_URL_PREFIX};

/// Create the router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    let uploads = ServeDir::new(&state.config.upload_dir);

    Router::new()
        .route("/", get(|| async { Redirect::to(ROUTE_ARTIKEL_INDEX) }))
        .route("/health", get(handlers::health_check))
        // Artikel admin
        .route("/admin/artikel", get(handlers::index))
        .route("/admin/artikel/index", get(handlers::index))
        .route("/admin/artikel/tambah", get(handlers::create))
        .route("/admin/artikel/store", post(handlers::store))
        .route("/admin/artikel/edit/:id", get(handlers::edit))
        .route("/admin/artikel/update/:id", post(handlers::update))
        .route("/admin/artikel/delete/:id", post(handlers::delete))
        // Content planner
        .route("/content-planner", get(planner::index))
        .route("/content-planner/add", post(planner::add))
        .nest_service(UPLOADS_URL_PREFIX, uploads)
        .layer(DefaultBodyLimit::max(MULTIPART_BODY_LIMIT))
        .with_state(state)
        // Middleware (order matters - bottom runs first)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
}
