//! `storefront-feed`
//!
//! **Responsibility:** fetch the product list from the catalog API.
//!
//! This crate provides:
//! - Typed configuration (`FeedConfig`) built from the environment
//! - A `reqwest`-based client that works natively and in the browser
//! - The error taxonomy for fetch failures
//!
//! The engine in `storefront-catalog` never sees any of this; it only gets the
//! decoded `Vec<Product>`.

pub mod client;
pub mod config;
pub mod error;

pub use client::{ProductFeedClient, ProductsEnvelope};
pub use config::{DEFAULT_API_URL, FeedConfig};
pub use error::FeedError;
