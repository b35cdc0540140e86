use crate::adapters::rows::decode_catalog;
use crate::domain::model::Catalog;
use crate::domain::ports::CatalogSource;
use crate::utils::error::{CompareError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// PostgREST embed selecting every phone with its colors.
const PHONES_SELECT: &str = "*,phone_colors(*)";

/// Reads the catalog from a Supabase project's REST endpoint.
#[derive(Debug, Clone)]
pub struct SupabaseCatalog {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SupabaseCatalog {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        })
    }

    fn phones_url(&self) -> String {
        format!("{}/rest/v1/phones", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl CatalogSource for SupabaseCatalog {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let url = self.phones_url();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("select", PHONES_SELECT)])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!("Catalog request failed with {}: {}", status, message);
            return Err(CompareError::DataSourceError {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        decode_catalog(&body)
    }
}
