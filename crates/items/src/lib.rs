//! Catalog items domain module.
//!
//! This crate contains the catalog's query, listing and aggregation rules,
//! implemented purely as deterministic functions over an item snapshot (no IO,
//! no HTTP, no storage).

pub mod item;
pub mod listing;
pub mod query;
pub mod stats;

pub use item::{Item, NewItem, UNCATEGORIZED};
pub use listing::{create, get_by_id, list, total_pages, ListResult};
pub use query::{ListQuery, QueryResolver, RawListParams, DEFAULT_PAGE_SIZE};
pub use stats::{aggregate, round2, CategoryStats, StatsResult};
