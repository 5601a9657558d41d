use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use crate::app::errors;
use crate::app::services::CatalogServices;

pub async fn get_stats(Extension(services): Extension<Arc<CatalogServices>>) -> axum::response::Response {
    match services.stats().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
