//! Artikel Admin HTTP Module
//! Server-rendered admin pages for articles and the content planner

pub mod handlers;
pub mod middleware;
pub mod planner;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
