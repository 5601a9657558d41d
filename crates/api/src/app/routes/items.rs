use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_core::ItemId;
use catalog_items::NewItem;

use crate::app::dto::{self, QueryPairs};
use crate::app::errors;
use crate::app::services::CatalogServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item))
}

pub async fn list_items(
    Extension(services): Extension<Arc<CatalogServices>>,
    Query(pairs): Query<QueryPairs>,
) -> axum::response::Response {
    let raw = dto::list_params(pairs);
    match services.list_items(&raw).await {
        Ok(page) => (StatusCode::OK, Json(page)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<CatalogServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // An unparseable id cannot match any item.
    let id: ItemId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::item_not_found(),
    };
    match services.get_item(id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<CatalogServices>>,
    body: Result<Json<NewItem>, JsonRejection>,
) -> axum::response::Response {
    let Json(payload) = match body {
        Ok(b) => b,
        Err(rejection) => return dto::body_rejection_to_response(rejection),
    };
    match services.create_item(payload).await {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
