use axum::extract::rejection::JsonRejection;

use catalog_items::RawListParams;

use crate::app::errors;

// -------------------------
// Request mapping
// -------------------------

/// Decoded query pairs, in request order. Extracting into pairs (rather than
/// a typed struct) means repeated or unexpected keys can never reject a request.
pub type QueryPairs = Vec<(String, String)>;

pub fn list_params(pairs: QueryPairs) -> RawListParams {
    RawListParams::from_pairs(pairs)
}

/// Map axum's JSON body rejection onto the API's error shape.
pub fn body_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    errors::json_error(rejection.status(), "invalid_body", rejection.body_text())
}
