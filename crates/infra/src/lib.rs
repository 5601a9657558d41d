//! Infrastructure layer: item persistence.

pub mod store;

pub use store::{InMemoryItemStore, ItemStore, JsonFileStore, StoreError};
