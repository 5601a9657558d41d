//! Decoding of `GET /api/items` bodies.
//!
//! Decoding never fails: the server may answer with a bare array of items or
//! with a paged object, and anything unexpected degrades to an empty page.

use serde_json::Value;

use catalog_items::Item;

/// A decoded listing response.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsPage {
    pub items: Vec<Item>,
    /// Page reported by the server, or the requested page.
    pub page: usize,
    /// `None` when the body did not describe pagination (bare array).
    pub total_pages: Option<usize>,
    pub total: Option<usize>,
}

impl ItemsPage {
    fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            page,
            total_pages: None,
            total: None,
        }
    }
}

pub fn decode_items_page(body: Value, requested_page: usize) -> ItemsPage {
    match body {
        Value::Array(entries) => ItemsPage {
            items: decode_items(entries),
            ..ItemsPage::empty(requested_page)
        },
        Value::Object(mut map) => {
            let items = match map.remove("items") {
                Some(Value::Array(entries)) => decode_items(entries),
                _ => Vec::new(),
            };
            let page = map
                .get("page")
                .and_then(as_count)
                .map_or(requested_page, |p| p.max(1));
            // Missing, zero or non-numeric totalPages all mean a single page.
            let total_pages = map
                .get("totalPages")
                .and_then(as_count)
                .filter(|&n| n > 0)
                .unwrap_or(1);
            ItemsPage {
                items,
                page,
                total_pages: Some(total_pages),
                total: map.get("total").and_then(as_count),
            }
        }
        _ => ItemsPage::empty(requested_page),
    }
}

/// Entries that are not JSON objects are dropped.
fn decode_items(entries: Vec<Value>) -> Vec<Item> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("skipping undecodable item: {e}");
                None
            }
        })
        .collect()
}

fn as_count(value: &Value) -> Option<usize> {
    let n = value.as_f64()?;
    (n.is_finite() && n >= 0.0).then(|| n as usize)
}
