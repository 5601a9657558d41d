//! `catalog-core`: shared building blocks for the catalog workspace.
//!
//! This crate contains **pure** primitives (no IO, no HTTP): identifiers, the
//! lenient integer parsing shared by query strings and path segments, and the
//! domain error model.

pub mod error;
pub mod id;
pub mod parse;

pub use error::{CatalogError, CatalogResult};
pub use id::{IdGenerator, ItemId};
pub use parse::parse_leading_int;
