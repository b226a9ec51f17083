//! Catalog API access from the browser.
//!
//! `reqwest` runs on top of `fetch` in wasm32, so this is the same client the
//! terminal host uses. The base URL is fixed at build time.

use storefront_catalog::Product;
use storefront_core::ProductId;
use storefront_feed::{DEFAULT_API_URL, FeedConfig, FeedError, ProductFeedClient};

fn client() -> Result<ProductFeedClient, FeedError> {
    let api_url = option_env!("STOREFRONT_API_URL").unwrap_or(DEFAULT_API_URL);
    ProductFeedClient::new(FeedConfig::new(api_url))
}

/// Fetch the product list once for the listing page.
pub async fn fetch_products() -> Result<Vec<Product>, FeedError> {
    client()?.fetch_products().await
}

/// Fetch a single product for the detail page.
pub async fn fetch_product(id: &ProductId) -> Result<Product, FeedError> {
    client()?.fetch_product(id).await
}
