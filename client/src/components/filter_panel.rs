//! Sidebar with the price slider, facet checkboxes, and "Clear All Filters".

use leptos::prelude::*;

use crate::state::catalog::{Facet, format_price};
use crate::state::listing::{ListingState, PRICE_MAX, PRICE_MIN, PRICE_STEP};

#[component]
pub fn FilterPanel(listing: RwSignal<ListingState>) -> impl IntoView {
    let low = move || listing.with(|l| l.price_range.0);
    let high = move || listing.with(|l| l.price_range.1);

    view! {
        <aside class="filter-panel">
            <h3 class="filter-panel__title">"Filters"</h3>

            <div class="filter-panel__group">
                <h4>"Price Range"</h4>
                <input
                    type="range"
                    class="filter-panel__range"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=PRICE_STEP.to_string()
                    aria-label="Minimum price"
                    prop:value=move || low().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                            listing.update(|l| l.set_price_min(value));
                        }
                    }
                />
                <input
                    type="range"
                    class="filter-panel__range"
                    min=PRICE_MIN.to_string()
                    max=PRICE_MAX.to_string()
                    step=PRICE_STEP.to_string()
                    aria-label="Maximum price"
                    prop:value=move || high().to_string()
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                            listing.update(|l| l.set_price_max(value));
                        }
                    }
                />
                <div class="filter-panel__range-labels">
                    <span>{move || format_price(low())}</span>
                    <span>{move || format_price(high())}</span>
                </div>
            </div>

            {Facet::ALL
                .into_iter()
                .map(|facet| {
                    view! {
                        <div class="filter-panel__group">
                            <h4>{facet.label()}</h4>
                            {facet
                                .options()
                                .iter()
                                .map(|option| {
                                    let id = format!("{}-{option}", facet.label());
                                    view! {
                                        <div class="filter-panel__option">
                                            <input
                                                type="checkbox"
                                                id=id.clone()
                                                prop:checked=move || listing.with(|l| l.is_facet_checked(facet, option))
                                                on:change=move |_| listing.update(|l| l.toggle_facet(facet, option))
                                            />
                                            <label for=id>{*option}</label>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            <button
                class="btn btn--outline filter-panel__clear"
                disabled=move || !listing.with(ListingState::has_active_filters)
                on:click=move |_| listing.update(ListingState::clear_filters)
            >
                "Clear All Filters"
            </button>
        </aside>
    }
}
