//! Item store: the single read/write capability the catalog depends on.
//!
//! The whole collection is read per request and rewritten on every mutation.
//! There is no cross-request locking: two concurrent read-modify-write cycles
//! can lose one of the updates.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use catalog_items::Item;

mod in_memory;
mod json_file;

pub use in_memory::InMemoryItemStore;
pub use json_file::JsonFileStore;

/// Item store operation error.
///
/// These are infrastructure failures; callers surface them as server errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON, or an entry is not a valid item.
    #[error("malformed item document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The document is valid JSON but its top level is not an array.
    #[error("item document is not a collection")]
    NotACollection,

    #[error("item store unavailable: {0}")]
    Unavailable(String),
}

/// Async read/write access to the whole item collection.
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    /// Snapshot of every item, in store order.
    async fn read(&self) -> Result<Vec<Item>, StoreError>;

    /// Replace the stored collection.
    async fn write(&self, items: &[Item]) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    async fn read(&self) -> Result<Vec<Item>, StoreError> {
        (**self).read().await
    }

    async fn write(&self, items: &[Item]) -> Result<(), StoreError> {
        (**self).write(items).await
    }
}
