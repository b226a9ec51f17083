//! Plain-text rendering of the listing page.

use std::fmt::Write;

use crate::listing::ListingModel;

/// Render the listing the way the web page lays it out: search, category
/// row, product cards, pager.
pub fn render(model: &ListingModel) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_listing(&mut out, model);
    out
}

fn write_listing(out: &mut String, model: &ListingModel) -> std::fmt::Result {
    writeln!(out, "Product Listing")?;
    writeln!(out)?;

    if !model.search_text.is_empty() {
        writeln!(out, "Search: {:?}", model.search_text)?;
    }

    let categories: Vec<String> = model
        .categories
        .iter()
        .map(|c| {
            if c.selected {
                format!("[{}]", c.label)
            } else {
                c.label.clone()
            }
        })
        .collect();
    writeln!(out, "Categories: {}", categories.join(" "))?;
    writeln!(out)?;

    if model.is_empty() {
        writeln!(out, "No products match the current filters.")?;
    }

    for card in &model.cards {
        writeln!(out, "{}  {}", card.title, card.price)?;
        if !card.description.is_empty() {
            writeln!(out, "    {}", card.description)?;
        }
        writeln!(out, "    View Details: {}", card.details_href)?;
    }

    writeln!(out)?;
    write_pager(out, model)
}

fn write_pager(out: &mut String, model: &ListingModel) -> std::fmt::Result {
    let previous = if model.controls.has_previous() { "< Previous" } else { "  Previous" };
    let next = if model.controls.has_next() { "Next >" } else { "Next  " };

    let pages: Vec<String> = model
        .controls
        .pages
        .iter()
        .map(|b| {
            if b.current {
                format!("[{}]", b.number)
            } else {
                b.number.to_string()
            }
        })
        .collect();

    if pages.is_empty() {
        writeln!(out, "{previous} | {next}")?;
    } else {
        writeln!(out, "{previous} | {} | {next}", pages.join(" "))?;
    }
    writeln!(
        out,
        "Page {} of {} ({} matching products)",
        model.page,
        model.page_count,
        model.match_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{CatalogSelection, CategoryFilter, PageSize, Product, derive_view};

    fn products() -> Vec<Product> {
        vec![
            Product::new(1u64, "Essence Mascara", "beauty", 9.99).with_description("Volumizing"),
            Product::new(2u64, "Wooden Bathroom Sink", "furniture", 799.99),
            Product::new(3u64, "Red Lipstick", "beauty", 12.99),
        ]
    }

    fn rendered(selection: &CatalogSelection, size: usize) -> String {
        let products = products();
        let view = derive_view(&products, selection, PageSize::new(size).unwrap());
        render(&ListingModel::new(&view, selection))
    }

    #[test]
    fn renders_cards_categories_and_pager() {
        let text = rendered(&CatalogSelection::default(), 2);

        assert!(text.contains("Categories: [All] beauty furniture"));
        assert!(text.contains("Essence Mascara  $9.99"));
        assert!(text.contains("    Volumizing"));
        assert!(text.contains("View Details: /products/2"));
        assert!(!text.contains("Red Lipstick"));
        assert!(text.contains("  Previous | [1] 2 | Next >"));
        assert!(text.contains("Page 1 of 2 (3 matching products)"));
    }

    #[test]
    fn renders_selected_category_and_search() {
        let selection = CatalogSelection::default()
            .with_category(CategoryFilter::only("beauty"))
            .with_search_text("red");
        let text = rendered(&selection, 9);

        assert!(text.contains("Search: \"red\""));
        assert!(text.contains("Categories: All [beauty] furniture"));
        assert!(text.contains("Red Lipstick  $12.99"));
        assert!(!text.contains("Essence"));
    }

    #[test]
    fn renders_empty_state() {
        let selection = CatalogSelection::default().with_search_text("zZz");
        let text = rendered(&selection, 9);

        assert!(text.contains("No products match the current filters."));
        assert!(text.contains("  Previous | Next  "));
        assert!(text.contains("Page 1 of 0 (0 matching products)"));
    }
}
