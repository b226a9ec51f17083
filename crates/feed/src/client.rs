//! HTTP client for the catalog API.

use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::config::FeedConfig;
use crate::error::FeedError;

/// Response shape of `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductsEnvelope {
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: usize,
    #[serde(default)]
    pub skip: usize,
    #[serde(default)]
    pub limit: usize,
}

/// Client for the product list endpoint.
///
/// The host calls `fetch_products` once on mount; there is no retry or
/// backoff. Failures surface as `FeedError` and it is up to the host to
/// render an empty catalog or an error message.
#[derive(Debug, Clone)]
pub struct ProductFeedClient {
    config: FeedConfig,
    http: reqwest::Client,
}

impl ProductFeedClient {
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| FeedError::Config(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Fetch the full product list.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FeedError> {
        let envelope = self.fetch_envelope().await?;
        tracing::info!(
            count = envelope.products.len(),
            total = envelope.total,
            "fetched product list"
        );
        Ok(envelope.products)
    }

    /// Fetch the raw `/products` envelope (list plus API paging metadata).
    pub async fn fetch_envelope(&self) -> Result<ProductsEnvelope, FeedError> {
        let url = self.config.products_url();
        let mut req = self.http.get(&url);

        if let Some(limit) = self.config.limit {
            req = req.query(&[("limit", limit)]);
        }

        tracing::debug!(%url, limit = ?self.config.limit, "requesting product list");
        let resp = req.send().await.map_err(|e| FeedError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status, "product list request failed");
            return Err(FeedError::Api(status, body));
        }

        resp.json::<ProductsEnvelope>()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))
    }

    /// Fetch one product (target of a card's "View Details" link).
    pub async fn fetch_product(&self, id: &ProductId) -> Result<Product, FeedError> {
        let url = format!("{}/{}", self.config.products_url(), id);
        tracing::debug!(%url, "requesting product");

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Network(e.to_string()))?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FeedError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(FeedError::Api(status.as_u16(), resp.text().await.unwrap_or_default()));
        }

        resp.json::<Product>()
            .await
            .map_err(|e| FeedError::Parse(e.to_string()))
    }
}
