//! Fixed storefront header with navigation, account links, and counters.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the cart and wishlist stores from context for its badges and owns
//! the mobile-menu flag through the shared `UiState`.

use leptos::prelude::*;

use crate::state::cart::CartStore;
use crate::state::ui::{NAV_ITEMS, UiState};
use crate::state::wishlist::WishlistStore;

/// Top navigation bar shown on every page.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();

    let cart_count = move || cart.with(CartStore::count);
    let wishlist_count = move || wishlist.with(WishlistStore::count);
    let close_menu = move |_: leptos::ev::MouseEvent| ui.update(UiState::close_menu);

    view! {
        <header class="header">
            <div class="header__bar">
                <a href="/" class="header__logo" on:click=close_menu>
                    "URBANTHREADZ"
                </a>

                <nav class="header__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="header__nav-link">
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="header__icons">
                    <a href="/search" class="btn btn--icon header__search" title="Search" aria-label="Search">
                        "⌕"
                    </a>
                    <a href="/auth" class="btn btn--icon" title="Account" aria-label="Account">
                        "👤"
                    </a>
                    <a href="/wishlist" class="btn btn--icon header__counter" title="Wishlist" aria-label="Wishlist">
                        "♡"
                        <Show when=move || { wishlist_count() > 0 }>
                            <span class="header__badge">{wishlist_count}</span>
                        </Show>
                    </a>
                    <a href="/cart" class="btn btn--icon header__counter" title="Cart" aria-label="Cart">
                        "🛍"
                        <Show when=move || { cart_count() > 0 }>
                            <span class="header__badge header__badge--accent">{cart_count}</span>
                        </Show>
                    </a>
                    <button
                        class="btn btn--icon header__menu-toggle"
                        on:click=move |_| ui.update(UiState::toggle_menu)
                        aria-label="Toggle menu"
                    >
                        {move || if ui.with(|u| u.mobile_menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || ui.with(|u| u.mobile_menu_open)>
                <div class="header__mobile">
                    <div class="header__mobile-search">
                        <span aria-hidden="true">"⌕"</span>
                        <input
                            type="text"
                            placeholder="Search..."
                            prop:value=move || ui.with(|u| u.search_draft.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                ui.update(|u| u.search_draft = value);
                            }
                        />
                    </div>
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="header__mobile-link" on:click=close_menu>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </header>
    }
}
