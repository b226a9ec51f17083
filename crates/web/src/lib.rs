//! `storefront-web`
//!
//! **Responsibility:** host the catalog listing.
//!
//! This crate provides:
//! - The listing view-model shared by every renderer (`listing`)
//! - A Leptos CSR frontend with routing (wasm32 only)
//! - A terminal renderer and CLI (native only)
//!
//! The host owns the selection state; everything displayed is derived from it
//! through `storefront-catalog` on each change.

pub mod listing;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use listing::{CategoryButton, ListingModel, ProductCard};
