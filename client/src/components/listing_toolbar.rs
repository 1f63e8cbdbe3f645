//! Toolbar above the product grid: filter toggle, count, sort, and layout.

use leptos::prelude::*;

use crate::state::listing::{ListingState, SortKey, ViewMode};

#[component]
pub fn ListingToolbar(listing: RwSignal<ListingState>, #[prop(into)] item_count: Signal<usize>) -> impl IntoView {
    let view_mode = move || listing.with(|l| l.view_mode);

    view! {
        <div class="listing-toolbar">
            <div class="listing-toolbar__left">
                <button
                    class="btn btn--outline"
                    class:btn--active=move || listing.with(|l| l.show_filters)
                    on:click=move |_| listing.update(ListingState::toggle_filters)
                >
                    "Filters"
                </button>
                <span class="listing-toolbar__count">{move || format!("{} items", item_count.get())}</span>
            </div>

            <div class="listing-toolbar__right">
                <select
                    class="listing-toolbar__sort"
                    aria-label="Sort by"
                    prop:value=move || listing.with(|l| l.sort.value())
                    on:change=move |ev| {
                        if let Some(sort) = SortKey::from_value(&event_target_value(&ev)) {
                            listing.update(|l| l.set_sort(sort));
                        }
                    }
                >
                    {SortKey::ALL
                        .into_iter()
                        .map(|key| view! { <option value=key.value()>{key.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>

                <div class="listing-toolbar__modes">
                    <button
                        class="btn btn--segment"
                        class:btn--active=move || view_mode() == ViewMode::Grid
                        on:click=move |_| listing.maybe_update(|l| l.set_view_mode(ViewMode::Grid))
                        aria-label="Grid view"
                    >
                        "▦"
                    </button>
                    <button
                        class="btn btn--segment"
                        class:btn--active=move || view_mode() == ViewMode::List
                        on:click=move |_| listing.maybe_update(|l| l.set_view_mode(ViewMode::List))
                        aria-label="List view"
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </div>
    }
}
