//! Derived view computation: categories, filter, paginate.
//!
//! Every function here is total and pure. Degenerate inputs (no products, a
//! search that matches nothing, a page past the end) produce empty
//! collections rather than errors, so the host can render the result without
//! defensive checks.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::product::Product;
use crate::selection::{CatalogSelection, CategoryFilter};

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(9) {
    Some(size) => size,
    None => panic!("default page size must be non-zero"),
};

/// Number of products per page (always positive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Page size used by the listing page.
    pub const DEFAULT: PageSize = PageSize(DEFAULT_PAGE_SIZE);

    pub fn new(size: usize) -> DomainResult<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| DomainError::validation("page size must be positive"))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl core::str::FromStr for PageSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|e| DomainError::validation(format!("page size: {e}")))?;
        Self::new(size)
    }
}

impl core::fmt::Display for PageSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for PageSize {}

/// One page worth of a filtered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Page<'a, T> {
    pub page_count: usize,
    pub items: &'a [T],
}

/// Everything the listing renders for one selection.
///
/// Borrowed from the product list; recomputed on every change, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedView<'a> {
    pub categories: Vec<CategoryFilter>,
    pub filtered: Vec<&'a Product>,
    pub page_count: usize,
    pub page_items: Vec<&'a Product>,
}

impl DerivedView<'_> {
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }
}

/// The no-filter sentinel followed by each distinct category in order of
/// first appearance.
pub fn derive_categories(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];
    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(CategoryFilter::only(product.category.as_str()));
        }
    }
    categories
}

/// Products matching both the category filter and the (case-insensitive)
/// title search, in their original order.
pub fn filter_products<'a>(products: &'a [Product], selection: &CatalogSelection) -> Vec<&'a Product> {
    let needle = selection.search_text.to_lowercase();
    products
        .iter()
        .filter(|product| {
            selection.category.matches(&product.category)
                && product.title.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Slice out 1-based `page` of `filtered`.
///
/// `page` is not validated: a page past the last one (or page 0) yields an
/// empty slice. Keeping the controls within `[1, page_count]` is the host's
/// job.
pub fn paginate<T>(filtered: &[T], page: usize, page_size: PageSize) -> Page<'_, T> {
    let size = page_size.get();
    let page_count = filtered.len().div_ceil(size);

    let items = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(size).min(filtered.len());
            let end = start.saturating_add(size).min(filtered.len());
            &filtered[start..end]
        }
        None => &filtered[..0],
    };

    Page { page_count, items }
}

/// Full recomputation for one selection.
pub fn derive_view<'a>(
    products: &'a [Product],
    selection: &CatalogSelection,
    page_size: PageSize,
) -> DerivedView<'a> {
    let categories = derive_categories(products);
    let filtered = filter_products(products, selection);
    let page = paginate(&filtered, selection.page, page_size);
    let page_count = page.page_count;
    let page_items = page.items.to_vec();

    DerivedView {
        categories,
        filtered,
        page_count,
        page_items,
    }
}
