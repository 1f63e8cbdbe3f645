//! Page buttons under the product grid.

use leptos::prelude::*;

use crate::state::listing::{ListingState, page_count};

#[component]
pub fn Pagination(listing: RwSignal<ListingState>, #[prop(into)] total: Signal<usize>) -> impl IntoView {
    let pages = move || page_count(total.get());
    let current = move || listing.with(|l| l.page);

    view! {
        <nav class="pagination" aria-label="Pagination">
            <button
                class="btn btn--outline"
                disabled=move || current() <= 1
                on:click=move |_| listing.update(|l| l.prev_page(total.get_untracked()))
            >
                "Previous"
            </button>
            {move || {
                (1..=pages())
                    .map(|page| {
                        view! {
                            <button
                                class="btn btn--outline"
                                class:btn--active=move || current() == page
                                on:click=move |_| listing.update(|l| l.set_page(page, total.get_untracked()))
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <button
                class="btn btn--outline"
                disabled=move || current() >= pages()
                on:click=move |_| listing.update(|l| l.next_page(total.get_untracked()))
            >
                "Next"
            </button>
        </nav>
    }
}
