//! Leptos application with routing.

use leptos::*;
use leptos_router::*;

use storefront_catalog::{CatalogSelection, PageSize, Product, SelectionEvent, derive_view};
use storefront_core::ProductId;

use crate::frontend::api;
use crate::listing::ListingModel;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes>
                <Route path="/" view=ProductListingPage/>
                <Route path="/products/:id" view=ProductDetailPage/>
            </Routes>
        </Router>
    }
}

/// Product listing page: search, category filter, cards, pager.
#[component]
fn ProductListingPage() -> impl IntoView {
    // Fetched once on mount; the list is never refetched or mutated.
    let products = create_local_resource(
        || (),
        |_| async move { api::fetch_products().await.map_err(|e| e.to_string()) },
    );

    let selection = create_rw_signal(CatalogSelection::default());

    let listing = create_memo(move |_| {
        let selection = selection.get();
        products.with(|loaded| {
            let loaded: &[Product] = match loaded {
                Some(Ok(products)) => products,
                _ => &[],
            };
            let view = derive_view(loaded, &selection, PageSize::DEFAULT);
            ListingModel::new(&view, &selection)
        })
    });

    let dispatch = move |event: SelectionEvent| {
        let page_count = listing.with_untracked(|l| l.page_count);
        selection.update(|current| *current = current.apply(event, page_count));
    };

    let fetch_error = move || match products.get() {
        Some(Err(e)) => Some(view! { <p class="error">{format!("Failed to load products: {e}")}</p> }),
        _ => None,
    };

    view! {
        <div class="container">
            <h1>"Product Listing"</h1>

            <div class="search">
                <input
                    type="text"
                    placeholder="Search products..."
                    prop:value=move || selection.with(|s| s.search_text.clone())
                    on:input=move |ev| dispatch(SelectionEvent::SearchEdited(event_target_value(&ev)))
                />
            </div>

            <div class="categories">
                {move || {
                    listing
                        .with(|l| l.categories.clone())
                        .into_iter()
                        .map(|button| {
                            let filter = button.filter.clone();
                            view! {
                                <button
                                    class={if button.selected { "category selected" } else { "category" }}
                                    on:click=move |_| dispatch(SelectionEvent::CategorySelected(filter.clone()))
                                >
                                    {button.label}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {fetch_error}

            {move || {
                products.loading().get().then(|| view! { <p class="loading">"Loading products..."</p> })
            }}

            <div class="grid">
                {move || {
                    listing
                        .with(|l| l.cards.clone())
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="card">
                                    <h2>{card.title.clone()}</h2>
                                    <p class="description">{card.description.clone()}</p>
                                    <p class="price">{card.price.clone()}</p>
                                    <A href=card.details_href.clone()>"View Details"</A>

                                    <div class="card-hover">
                                        <h3>"More Details"</h3>
                                        <p>{card.description}</p>
                                        <p class="price">{card.price}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>

            <nav class="pager">
                <button
                    class="pager-step"
                    disabled=move || listing.with(|l| !l.controls.has_previous())
                    on:click=move |_| dispatch(SelectionEvent::PreviousPage)
                >
                    "Previous"
                </button>
                {move || {
                    listing
                        .with(|l| l.controls.pages.clone())
                        .into_iter()
                        .map(|button| {
                            let number = button.number;
                            view! {
                                <button
                                    class={if button.current { "page current" } else { "page" }}
                                    on:click=move |_| dispatch(SelectionEvent::PageRequested(number))
                                >
                                    {number}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pager-step"
                    disabled=move || listing.with(|l| !l.controls.has_next())
                    on:click=move |_| dispatch(SelectionEvent::NextPage)
                >
                    "Next"
                </button>
            </nav>
        </div>
    }
}

/// Product detail page (target of "View Details").
#[component]
fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let product = create_local_resource(product_id, |raw_id| async move {
        let id: ProductId = raw_id.parse().map_err(|e: storefront_core::DomainError| e.to_string())?;
        api::fetch_product(&id).await.map_err(|e| e.to_string())
    });

    view! {
        <div class="container">
            <A href="/">"Back to products"</A>

            <Suspense fallback=move || view! { <p class="loading">"Loading product..."</p> }>
                {move || {
                    product.get().map(|result| match result {
                        Ok(product) => view! {
                            <div class="detail">
                                <h1>{product.title.clone()}</h1>
                                <p class="category">{product.category.clone()}</p>
                                <p class="description">{product.description.clone()}</p>
                                <p class="price">{product.display_price()}</p>
                                {product.brand.clone().map(|brand| view! { <p class="brand">{brand}</p> })}
                                {product.thumbnail.clone().map(|src| view! { <img src=src alt=product.title.clone()/> })}
                            </div>
                        }
                        .into_view(),
                        Err(e) => view! { <p class="error">{e}</p> }.into_view(),
                    })
                }}
            </Suspense>
        </div>
    }
}
