use axum::{routing::get, Router};

pub mod items;
pub mod stats;
pub mod system;

/// Router for the `/api` resources.
pub fn router() -> Router {
    Router::new()
        .nest("/items", items::router())
        .route("/stats", get(stats::get_stats))
}
