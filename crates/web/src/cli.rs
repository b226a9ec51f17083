//! Command-line host: fetch once, apply the selection, print the page.

use std::io::Write;

use anyhow::Context;
use clap::Parser;

use storefront_catalog::{
    CatalogSelection, CategoryFilter, PageSize, SelectionEvent, derive_view,
};
use storefront_feed::{FeedConfig, ProductFeedClient};

use crate::listing::ListingModel;
use crate::terminal;

/// Browse the product catalog from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version)]
pub struct Args {
    /// Catalog API base URL (overrides STOREFRONT_API_URL).
    #[arg(long)]
    pub api_url: Option<String>,

    /// Number of products to request from the API (overrides STOREFRONT_FEED_LIMIT).
    #[arg(long)]
    pub limit: Option<u32>,

    /// Category to show; "all" disables the filter.
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Case-insensitive title search.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// 1-based page to show (clamped to the available pages).
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Products per page.
    #[arg(long, default_value_t = PageSize::DEFAULT)]
    pub page_size: PageSize,

    /// Print the derived view as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Selection before page clamping.
    pub fn selection(&self) -> CatalogSelection {
        CatalogSelection::default()
            .with_category(CategoryFilter::parse_label(&self.category))
            .with_search_text(self.search.clone())
    }

    /// Environment configuration with command-line overrides on top.
    pub fn feed_config(&self) -> anyhow::Result<FeedConfig> {
        let mut config = FeedConfig::from_env().context("failed to read feed configuration")?;
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if self.limit.is_some() {
            config.limit = self.limit;
        }
        Ok(config)
    }
}

pub async fn run(args: Args, out: &mut impl Write) -> anyhow::Result<()> {
    let config = args.feed_config()?;
    tracing::info!(api_url = %config.api_url, "loading catalog");

    let client = ProductFeedClient::new(config)?;
    let products = client
        .fetch_products()
        .await
        .context("failed to fetch product list")?;

    // Page moves are clamped by the host, like the web pager does.
    let selection = args.selection();
    let page_count = derive_view(&products, &selection, args.page_size).page_count;
    let selection = selection.apply(SelectionEvent::PageRequested(args.page), page_count);
    if selection.page != args.page {
        tracing::warn!(requested = args.page, shown = selection.page, "page out of range");
    }

    let view = derive_view(&products, &selection, args.page_size);
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &view).context("failed to encode view")?;
        writeln!(out)?;
    } else {
        let model = ListingModel::new(&view, &selection);
        out.write_all(terminal::render(&model).as_bytes())?;
    }
    out.flush()?;

    Ok(())
}
