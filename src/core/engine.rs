use crate::core::page::ComparisonPage;
use crate::core::resolver::resolve_comparison;
use crate::core::share::share_link;
use crate::core::sitemap::{build_sitemap, SitemapEntry, SitemapOptions};
use crate::domain::model::SelectionInput;
use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::Result;
use chrono::Utc;

/// Fetches a fresh catalog per request and turns it into a comparison page
/// or a sitemap.
pub struct ComparisonEngine<S: CatalogSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: CatalogSource, C: ConfigProvider> ComparisonEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }

    pub async fn compare(&self, input: &SelectionInput) -> Result<ComparisonPage> {
        tracing::debug!("Fetching catalog");
        let catalog = self.source.fetch_catalog().await?;
        tracing::info!("Fetched {} phones", catalog.len());

        let resolved = resolve_comparison(&catalog, input)?;
        let link = share_link(self.config.base_url(), &resolved)?;

        Ok(ComparisonPage::build(&catalog, &resolved, Some(link)))
    }

    pub async fn sitemap(&self) -> Result<Vec<SitemapEntry>> {
        let catalog = self.source.fetch_catalog().await?;
        tracing::info!("Fetched {} phones for sitemap", catalog.len());

        let options = SitemapOptions {
            change_frequency: self.config.change_frequency().to_string(),
            pair_priority: self.config.pair_priority(),
        };
        build_sitemap(self.config.base_url(), &catalog, Utc::now(), &options)
    }
}
