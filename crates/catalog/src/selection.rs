//! Host-owned selection state and its transitions.
//!
//! The engine never stores a selection. The host keeps one, feeds it into
//! [`crate::derive_view`] on every change and evolves it with
//! [`CatalogSelection::apply`], which returns a new value instead of
//! mutating in place.

use serde::Serialize;

use storefront_core::ValueObject;

/// Label of the no-filter sentinel in the category list.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Category selection: the no-filter sentinel or one concrete label.
///
/// Serializes as its label so the derived category list reads as plain
/// strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum CategoryFilter {
    /// Matches every product.
    #[default]
    All,
    /// Matches products whose category equals the label exactly.
    Only(String),
}

impl CategoryFilter {
    pub fn only(label: impl Into<String>) -> Self {
        Self::Only(label.into())
    }

    /// Parses user input; `all` in any casing selects the sentinel.
    pub fn parse_label(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() || input.eq_ignore_ascii_case(ALL_CATEGORIES_LABEL) {
            Self::All
        } else {
            Self::Only(input.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(label) => label,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => label == category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL_CATEGORIES_LABEL.to_string(),
            CategoryFilter::Only(label) => label,
        }
    }
}

impl ValueObject for CategoryFilter {}

/// Current user choices on the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSelection {
    pub category: CategoryFilter,
    pub search_text: String,
    /// 1-based page index.
    pub page: usize,
}

impl Default for CatalogSelection {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            search_text: String::new(),
            page: 1,
        }
    }
}

impl ValueObject for CatalogSelection {}

/// Discrete user interactions the host reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    CategorySelected(CategoryFilter),
    SearchEdited(String),
    PageRequested(usize),
    PreviousPage,
    NextPage,
}

/// Clamp a requested page into `[1, max(page_count, 1)]`.
pub fn clamp_page(page: usize, page_count: usize) -> usize {
    page.clamp(1, page_count.max(1))
}

impl CatalogSelection {
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search_text(mut self, search_text: impl Into<String>) -> Self {
        self.search_text = search_text.into();
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Evolve the selection from a single interaction.
    ///
    /// `page_count` is the page count of the view the event was raised on;
    /// page moves are clamped against it. Filter changes always go back to
    /// the first page since the old page may no longer exist.
    pub fn apply(&self, event: SelectionEvent, page_count: usize) -> Self {
        let mut next = self.clone();
        match event {
            SelectionEvent::CategorySelected(category) => {
                next.category = category;
                next.page = 1;
            }
            SelectionEvent::SearchEdited(text) => {
                next.search_text = text;
                next.page = 1;
            }
            SelectionEvent::PageRequested(page) => {
                next.page = clamp_page(page, page_count);
            }
            SelectionEvent::PreviousPage => {
                next.page = clamp_page(self.page.saturating_sub(1), page_count);
            }
            SelectionEvent::NextPage => {
                next.page = clamp_page(self.page.saturating_add(1), page_count);
            }
        }
        next
    }
}
