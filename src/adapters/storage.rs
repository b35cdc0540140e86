use crate::adapters::rows::decode_catalog;
use crate::domain::model::Catalog;
use crate::domain::ports::{CatalogSource, Storage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Catalog stored as a JSON array of phones, e.g. an export of the phones table.
#[derive(Debug, Clone)]
pub struct FileCatalog<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileCatalog<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> CatalogSource for FileCatalog<S> {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        tracing::debug!("Reading catalog from {}", self.path);
        let data = self.storage.read_file(&self.path).await?;
        decode_catalog(&data)
    }
}
