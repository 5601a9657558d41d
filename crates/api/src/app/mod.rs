//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: store access and the catalog operations built on it
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: query-string mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Extension, Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use catalog_infra::{ItemStore, JsonFileStore};
use catalog_items::QueryResolver;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::CatalogServices;

/// Build the full HTTP router around already-wired services.
pub fn build_app(services: Arc<CatalogServices>, cors_origin: Option<&str>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(cors_origin))
                .layer(Extension(services)),
        )
}

/// Build the router backed by the JSON file named in `config` (entrypoint used by `main.rs`).
pub fn build_app_from_config(config: &ApiConfig) -> Router {
    let store: Arc<dyn ItemStore> = Arc::new(JsonFileStore::new(&config.data_path));
    let services = CatalogServices::new(store)
        .with_resolver(QueryResolver::with_max_page_size(config.max_page_size));
    build_app(Arc::new(services), config.cors_origin.as_deref())
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.map(HeaderValue::from_str) {
        None => AllowOrigin::from(Any),
        Some(Ok(value)) => AllowOrigin::exact(value),
        Some(Err(e)) => {
            tracing::warn!("ignoring invalid CORS origin ({e}); allowing any origin");
            AllowOrigin::from(Any)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
