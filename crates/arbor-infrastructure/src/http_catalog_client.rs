//! HttpCatalogClient - REST implementation of [`CatalogClient`].
//!
//! Issues plain GET requests and hands back the parsed JSON body. There is no
//! retry and no request timeout: a failed call surfaces immediately.

use arbor_core::catalog::{CatalogClient, ItemId};
use arbor_core::config::ArborConfig;
use arbor_core::error::{ArborError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::endpoints::Endpoints;

/// Catalog client backed by `reqwest`.
#[derive(Clone)]
pub struct HttpCatalogClient {
    client: Client,
    endpoints: Endpoints,
}

impl HttpCatalogClient {
    /// Creates a client for the API rooted at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            client: Client::new(),
            endpoints: Endpoints::new(base_url),
        }
    }

    /// Creates a client from the resolved configuration.
    pub fn from_config(config: &ArborConfig) -> Self {
        Self::new(&config.api_base_url)
    }

    /// GETs `url` and parses the body as JSON.
    ///
    /// Fails with [`ArborError::Transport`] when the request cannot complete,
    /// when the status is outside 2xx, or when the body is not JSON.
    pub async fn fetch_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ArborError::network(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "catalog request failed");
            return Err(ArborError::http_status(status.as_u16(), url));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ArborError::network(url, format!("Failed to parse response body: {}", e)))
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn categories(&self) -> Result<Value> {
        self.fetch_json(&self.endpoints.categories()).await
    }

    async fn all_plants(&self) -> Result<Value> {
        self.fetch_json(&self.endpoints.all_plants()).await
    }

    async fn plants_by_category(&self, category_id: &ItemId) -> Result<Value> {
        self.fetch_json(&self.endpoints.plants_by_category(category_id))
            .await
    }

    async fn plant_detail(&self, plant_id: &ItemId) -> Result<Value> {
        self.fetch_json(&self.endpoints.plant_detail(plant_id)).await
    }
}
