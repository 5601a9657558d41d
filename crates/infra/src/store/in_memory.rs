use std::sync::RwLock;

use catalog_items::Item;

use super::{ItemStore, StoreError};

/// In-memory item store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn read(&self) -> Result<Vec<Item>, StoreError> {
        self.items
            .read()
            .map(|items| items.clone())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    async fn write(&self, items: &[Item]) -> Result<(), StoreError> {
        let mut guard = self
            .items
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *guard = items.to_vec();
        Ok(())
    }
}
