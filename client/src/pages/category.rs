//! Category listing page shared by every department route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The product list is generated once when the page mounts and held in a
//! `StoredValue`, so sorting and filtering always work over the same records.
//! Every control writes to one `ListingState` signal; the visible list is a
//! memo over that signal.

use leptos::prelude::*;

use crate::components::filter_panel::FilterPanel;
use crate::components::listing_toolbar::ListingToolbar;
use crate::components::pagination::Pagination;
use crate::components::product_card::ProductCard;
use crate::state::catalog::{Category, Product};
use crate::state::listing::{ListingState, ViewMode};
use crate::util::mock_catalog::{listing_products, page_load_seed};

#[component]
pub fn CategoryPage(category: Category) -> impl IntoView {
    let products = StoredValue::new(listing_products(category, page_load_seed(category)));
    let listing = RwSignal::new(ListingState::default());

    let visible = Memo::new(move |_| listing.with(|l| products.with_value(|all| l.visible_products(all))));
    let total = Signal::derive(move || visible.with(Vec::len));
    let page_items = move || -> Vec<Product> { listing.with(|l| visible.with(|v| l.page_slice(v).to_vec())) };
    let view_mode = move || listing.with(|l| l.view_mode);

    view! {
        <main class="page page--category">
            <header class="category__header">
                <h1 class="category__title">{category.title()}</h1>
            </header>

            <ListingToolbar listing=listing item_count=total/>

            <div class="category__body">
                <Show when=move || listing.with(|l| l.show_filters)>
                    <FilterPanel listing=listing/>
                </Show>

                <div class="category__results">
                    <Show
                        when=move || { total.get() > 0 }
                        fallback=move || {
                            view! {
                                <div class="category__empty">
                                    <p>"No products match these filters."</p>
                                    <button
                                        class="btn btn--outline"
                                        on:click=move |_| listing.update(ListingState::clear_filters)
                                    >
                                        "Clear All Filters"
                                    </button>
                                </div>
                            }
                        }
                    >
                        <div
                            class="category__grid"
                            class:category__grid--list=move || view_mode() == ViewMode::List
                        >
                            {move || {
                                let mode = view_mode();
                                page_items()
                                    .into_iter()
                                    .map(|product| view! { <ProductCard product=product view_mode=mode/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <Pagination listing=listing total=total/>
                    </Show>
                </div>
            </div>
        </main>
    }
}
