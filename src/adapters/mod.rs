// Adapters layer: concrete implementations for external systems (http, local files).

pub mod http;
mod rows;
pub mod storage;

use crate::domain::model::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use async_trait::async_trait;

/// The catalog source picked by configuration.
pub enum CatalogBackend {
    Supabase(http::SupabaseCatalog),
    File(storage::FileCatalog<storage::LocalStorage>),
}

#[async_trait]
impl CatalogSource for CatalogBackend {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        match self {
            CatalogBackend::Supabase(source) => source.fetch_catalog().await,
            CatalogBackend::File(source) => source.fetch_catalog().await,
        }
    }
}
