use crate::domain::model::Catalog;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Public URL of the comparison page, used for share links and the sitemap.
    fn base_url(&self) -> &str;
    fn change_frequency(&self) -> &str;
    fn pair_priority(&self) -> f64;
}

/// Where the phone catalog comes from. Each call fetches a fresh snapshot.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog>;
}
