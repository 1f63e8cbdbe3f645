//! Wishlist page: saved product ids with a remove action.

use leptos::prelude::*;

use crate::state::wishlist::WishlistStore;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = expect_context::<RwSignal<WishlistStore>>();

    let items = move || {
        wishlist
            .with(|w| w.ids().collect::<Vec<_>>())
            .into_iter()
            .map(|id| {
                view! {
                    <li class="wishlist__item">
                        <a href=format!("/product/{id}")>{format!("Product #{id}")}</a>
                        <button
                            class="btn btn--outline"
                            on:click=move |_| {
                                wishlist.update(|w| {
                                    w.toggle(id);
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <main class="page page--wishlist">
            <h1 class="page__title">"Wishlist"</h1>
            <Show
                when=move || { wishlist.with(WishlistStore::count) > 0 }
                fallback=|| view! { <p class="page__empty">"Nothing saved yet."</p> }
            >
                <ul class="wishlist__items">{items}</ul>
            </Show>
        </main>
    }
}
