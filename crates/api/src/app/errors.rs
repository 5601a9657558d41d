use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::CatalogError;
use catalog_infra::StoreError;

use crate::app::services::ServiceError;

/// Client-facing message for every store failure.
pub const STORE_ERROR_MESSAGE: &str = "Item store unavailable";

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        // Both a missing id and an unparseable one are "no such item".
        ServiceError::Catalog(CatalogError::NotFound(_) | CatalogError::InvalidId(_)) => item_not_found(),
        ServiceError::Store(e) => store_error_to_response(e),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    // The detail can name the data file; keep it in the logs only.
    tracing::warn!(error = %err, "item store failure");
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", STORE_ERROR_MESSAGE)
}

pub fn item_not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "not_found", "Item not found")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
