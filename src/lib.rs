//! Artikel Admin Library
//!
//! Server-rendered admin panel for a small publishing site:
//! - Article CRUD with image upload and dated slugs
//! - Category lookup
//! - Content planner for scheduling social-media posts
//! - One-shot flash messages across redirects

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use api::{create_router, AppState};
pub use models::{AppConfig, AppError, AppResult, ErrorCode};
pub use providers::Database;
pub use utils::{FlashStore, Views};
