use std::path::{Path, PathBuf};

use serde_json::Value;

use catalog_items::Item;

use super::{ItemStore, StoreError};

/// Item store backed by a single JSON array file.
///
/// Reads parse the whole file; writes replace it with the pretty-printed
/// (2-space indented) collection. A missing file is an error, not an empty
/// catalog. A top-level `null` reads as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Decode a whole item document.
pub(crate) fn decode_document(raw: &str) -> Result<Vec<Item>, StoreError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Null => Ok(Vec::new()),
        doc @ Value::Array(_) => Ok(serde_json::from_value(doc)?),
        _ => Err(StoreError::NotACollection),
    }
}

#[async_trait::async_trait]
impl ItemStore for JsonFileStore {
    async fn read(&self) -> Result<Vec<Item>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        decode_document(&raw)
    }

    async fn write(&self, items: &[Item]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string_pretty(items)?;
        tokio::fs::write(&self.path, encoded)
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "item document written");
        Ok(())
    }
}
