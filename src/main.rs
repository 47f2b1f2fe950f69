//! Artikel Admin Server
//!
//! Usage:
//!   cargo run
//!
//! Environment (also read from `.env`):
//!   ARTIKEL_HOST        - Server host (default: 0.0.0.0)
//!   PORT / ARTIKEL_PORT - Server port (default: 8080)
//!   DATABASE_URL        - SQLite URL (default: sqlite://artikel.db?mode=rwc)
//!   UPLOAD_DIR          - Upload root (default: uploads)
//!   MAX_IMAGE_KB        - Image size limit (default: 2048)
//!   RUST_LOG            - Log filter (default: info)

use artikel_admin::api::{create_router, AppState};
use artikel_admin::models::AppConfig;
use artikel_admin::providers::Database;
use artikel_admin::utils::constants::{APP_NAME, APP_VERSION};
use artikel_admin::utils::flash::start_cleanup_task;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    print_banner();

    let config = AppConfig::from_env()?;
    config.ensure_upload_dirs()?;
    info!("📁 Uploads stored under {}", config.upload_dir.display());

    let db = Database::connect(&config.database_url).await?;
    db.init().await?;
    info!("🗄️ Database ready: {}", config.database_url);

    let addr = config.bind_addr()?;
    let state = Arc::new(AppState::new(config, db)?);

    // Flash store cleanup every minute
    let cleanup = start_cleanup_task(state.flash.clone());
    info!("🧹 Background cleanup task started");

    let app = create_router(state.clone());

    info!("🚀 {} starting on http://{}", APP_NAME, addr);
    info!("");
    info!("Pages:");
    info!("  GET  /admin/artikel/index   - Article list");
    info!("  GET  /admin/artikel/tambah  - New article form");
    info!("  GET  /content-planner       - Content planner");
    info!("  GET  /health                - Health check");
    info!("");
    info!("Press Ctrl+C for graceful shutdown");

    let listener = TcpListener::bind(addr).await?;

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("⚠️ Failed to listen for Ctrl+C: {}", e);
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 Shutdown signal received, cleaning up...");
    cleanup.abort();
    state.db.close().await;
    info!("👋 {} shutdown complete", APP_NAME);

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    +--------------------------------------------------+
    |                                                  |
    |      A R T I K E L   A D M I N   v{:<10}     |
    |      Articles & Content Planner                  |
    |                                                  |
    +--------------------------------------------------+
    "#,
        APP_VERSION
    );
}
