//! Listing engine: filtering, pagination, lookup and creation over a snapshot.

use serde::{Deserialize, Serialize};

use catalog_core::{CatalogError, CatalogResult, IdGenerator, ItemId};

use crate::item::{Item, NewItem};
use crate::query::ListQuery;

/// One page of a (possibly filtered) listing.
///
/// Invariants: `1 <= page <= total_pages`,
/// `total_pages == max(1, ceil(total / per_page))`, `items.len() <= per_page`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    pub items: Vec<Item>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub per_page: usize,
}

/// `max(1, ceil(total / per_page))`; a zero page size is treated as 1.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1)).max(1)
}

/// Case-insensitive substring match on the item name.
fn matches_filter(item: &Item, folded_filter: &str) -> bool {
    folded_filter.is_empty() || item.name_or_empty().to_lowercase().contains(folded_filter)
}

/// Filter, clamp the requested page and slice it out, keeping store order.
pub fn list(items: &[Item], query: &ListQuery) -> ListResult {
    let folded = query.filter_text.to_lowercase();
    let filtered: Vec<&Item> = items
        .iter()
        .filter(|item| matches_filter(item, &folded))
        .collect();

    let per_page = query.per_page.max(1);
    let total = filtered.len();
    let total_pages = total_pages(total, per_page);
    let page = query.page.clamp(1, total_pages);

    // `page <= total_pages` keeps `start <= total`, so neither bound overflows.
    let start = (page - 1) * per_page;
    let end = start.saturating_add(per_page).min(total);

    ListResult {
        items: filtered[start..end].iter().map(|item| (*item).clone()).collect(),
        total,
        page,
        total_pages,
        per_page,
    }
}

/// Exact id lookup.
pub fn get_by_id(items: &[Item], id: ItemId) -> CatalogResult<&Item> {
    items
        .iter()
        .find(|item| item.id() == Some(id))
        .ok_or_else(|| CatalogError::not_found(id))
}

/// Append a new item with a freshly allocated id and return it.
///
/// The payload is not validated. Persisting the updated collection is the
/// caller's job.
pub fn create(items: &mut Vec<Item>, payload: NewItem, ids: &IdGenerator) -> Item {
    let highest = items.iter().filter_map(Item::id).max();
    let item = payload.into_item(ids.next_after(highest));
    items.push(item.clone());
    item
}
