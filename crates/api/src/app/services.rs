//! Catalog operations wired to an item store.
//!
//! Every operation reads a fresh snapshot; nothing is cached between requests.

use std::sync::Arc;

use thiserror::Error;

use catalog_core::{CatalogError, IdGenerator, ItemId};
use catalog_infra::{ItemStore, StoreError};
use catalog_items::{
    aggregate, create, get_by_id, list, Item, ListResult, NewItem, QueryResolver, RawListParams,
    StatsResult,
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CatalogServices {
    store: Arc<dyn ItemStore>,
    resolver: QueryResolver,
    ids: IdGenerator,
}

impl CatalogServices {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self {
            store,
            resolver: QueryResolver::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn with_resolver(mut self, resolver: QueryResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub async fn list_items(&self, raw: &RawListParams) -> Result<ListResult, ServiceError> {
        let query = self.resolver.resolve(raw);
        let items = self.store.read().await?;
        Ok(list(&items, &query))
    }

    pub async fn get_item(&self, id: ItemId) -> Result<Item, ServiceError> {
        let items = self.store.read().await?;
        Ok(get_by_id(&items, id)?.clone())
    }

    /// Read, append and rewrite the whole collection. Not atomic with respect
    /// to other concurrent creates.
    pub async fn create_item(&self, payload: NewItem) -> Result<Item, ServiceError> {
        let mut items = self.store.read().await?;
        let item = create(&mut items, payload, &self.ids);
        self.store.write(&items).await?;
        tracing::info!(item_id = ?item.id(), total = items.len(), "item created");
        Ok(item)
    }

    /// Statistics over the whole catalog. A document whose top level is not
    /// an array counts as an empty catalog here.
    pub async fn stats(&self) -> Result<StatsResult, ServiceError> {
        let items = match self.store.read().await {
            Ok(items) => items,
            Err(StoreError::NotACollection) => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(aggregate(&items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_infra::InMemoryItemStore;

    fn services(items: Vec<Item>) -> CatalogServices {
        CatalogServices::new(Arc::new(InMemoryItemStore::with_items(items)))
    }

    /// Store whose document is valid JSON but not an array.
    struct ObjectDocumentStore;

    #[async_trait::async_trait]
    impl ItemStore for ObjectDocumentStore {
        async fn read(&self) -> Result<Vec<Item>, StoreError> {
            Err(StoreError::NotACollection)
        }

        async fn write(&self, _items: &[Item]) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn created_items_are_visible_to_later_reads() {
        let svc = services(vec![Item::new(ItemId::new(5), "Lamp")]);
        let created = svc
            .create_item(NewItem::named("Desk"))
            .await
            .unwrap();

        assert_eq!(created.id(), Some(ItemId::new(6)));
        assert_eq!(svc.get_item(ItemId::new(6)).await.unwrap(), created);

        let page = svc.list_items(&RawListParams::default()).await.unwrap();
        assert_eq!(page.total, 2);
    }

    #[tokio::test]
    async fn missing_item_is_a_catalog_error() {
        let err = services(vec![]).get_item(ItemId::new(1)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Catalog(CatalogError::NotFound(_))));
    }

    #[tokio::test]
    async fn resolver_cap_applies_to_listing() {
        let items = (1..=30).map(|i| Item::new(ItemId::new(i), format!("Item {i}"))).collect();
        let svc = services(items).with_resolver(QueryResolver::with_max_page_size(Some(5)));
        let raw = RawListParams::from_pairs([("limit", "50")]);

        let page = svc.list_items(&raw).await.unwrap();
        assert_eq!(page.per_page, 5);
        assert_eq!(page.total_pages, 6);
    }

    #[tokio::test]
    async fn stats_treat_non_collection_documents_as_empty() {
        let svc = CatalogServices::new(Arc::new(ObjectDocumentStore));
        let stats = svc.stats().await.unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.categories.is_empty());

        let err = svc.list_items(&RawListParams::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Store(StoreError::NotACollection)));
    }
}
