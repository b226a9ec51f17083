//! Fetch error taxonomy.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("invalid feed configuration: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("product {0} not found")]
    NotFound(String),
    #[error("parse error: {0}")]
    Parse(String),
}
