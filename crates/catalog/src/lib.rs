//! Catalog view-state engine.
//!
//! This crate derives everything the product listing renders (category list,
//! filtered products, page count, current page) from the full product list
//! and the host's current selection. It is implemented purely as
//! deterministic logic (no IO, no HTTP, no rendering, no internal state).

pub mod pagination;
pub mod product;
pub mod selection;
pub mod view;

pub use pagination::{PageButton, PageControls};
pub use product::Product;
pub use selection::{CatalogSelection, CategoryFilter, SelectionEvent, clamp_page};
pub use view::{
    DerivedView, Page, PageSize, derive_categories, derive_view, filter_products, paginate,
};
