//! Feed configuration.

use crate::error::FeedError;

/// Public catalog API the listing page was built against.
pub const DEFAULT_API_URL: &str = "https://dummyjson.com";

pub const API_URL_ENV: &str = "STOREFRONT_API_URL";
pub const FEED_LIMIT_ENV: &str = "STOREFRONT_FEED_LIMIT";

/// Configuration for feed client construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Base URL of the catalog API (without the `/products` suffix).
    pub api_url: String,
    /// Page size requested from the API. `None` leaves the API default
    /// (30 for dummyjson); `Some(0)` asks dummyjson for everything.
    pub limit: Option<u32>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            limit: None,
        }
    }
}

impl FeedConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Read `STOREFRONT_API_URL` / `STOREFRONT_FEED_LIMIT`, falling back to
    /// the defaults when unset.
    pub fn from_env() -> Result<Self, FeedError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, FeedError> {
        let api_url = lookup(API_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let limit = match lookup(FEED_LIMIT_ENV) {
            Some(raw) => Some(raw.trim().parse::<u32>().map_err(|e| {
                FeedError::Config(format!("{FEED_LIMIT_ENV}={raw:?}: {e}"))
            })?),
            None => None,
        };

        Ok(Self { api_url, limit })
    }

    /// `{api_url}/products`, tolerating a trailing slash on the base URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.api_url.trim_end_matches('/'))
    }
}
