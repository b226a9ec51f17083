//! Display model of the listing page.
//!
//! Owned and renderer-agnostic: the Leptos page keeps it in a memo, the
//! terminal renderer prints it.

use serde::Serialize;

use storefront_catalog::{CatalogSelection, CategoryFilter, DerivedView, PageControls, Product};
use storefront_core::ProductId;

/// One entry of the category button row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryButton {
    pub label: String,
    pub filter: CategoryFilter,
    pub selected: bool,
}

/// One product card of the grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: String,
    pub details_href: String,
    pub thumbnail: Option<String>,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.display_price(),
            details_href: product.details_path(),
            thumbnail: product.thumbnail.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingModel {
    pub search_text: String,
    pub categories: Vec<CategoryButton>,
    pub cards: Vec<ProductCard>,
    pub controls: PageControls,
    pub page: usize,
    pub page_count: usize,
    pub match_count: usize,
}

impl ListingModel {
    pub fn new(view: &DerivedView<'_>, selection: &CatalogSelection) -> Self {
        let categories = view
            .categories
            .iter()
            .map(|filter| CategoryButton {
                label: filter.label().to_string(),
                filter: filter.clone(),
                selected: *filter == selection.category,
            })
            .collect();

        let cards = view.page_items.iter().map(|product| ProductCard::from(*product)).collect();

        Self {
            search_text: selection.search_text.clone(),
            categories,
            cards,
            controls: PageControls::new(selection.page, view.page_count),
            page: selection.page,
            page_count: view.page_count,
            match_count: view.filtered.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
