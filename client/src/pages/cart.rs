//! Cart page: read-only view of the session cart.

use leptos::prelude::*;

use crate::state::cart::CartStore;
use crate::state::catalog::format_price;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();

    let lines = move || {
        cart.with(|c| {
            c.lines()
                .iter()
                .map(|line| {
                    view! {
                        <li class="cart__line">
                            <a href=format!("/product/{}", line.product_id) class="cart__name">
                                {line.product_name.clone()}
                            </a>
                            <span class="cart__variant">{format!("{} / {}", line.color, line.size)}</span>
                            <span class="cart__quantity">{format!("× {}", line.quantity)}</span>
                            <span class="cart__total">{format_price(line.line_total())}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <main class="page page--cart">
            <h1 class="page__title">"Shopping Cart"</h1>
            <Show
                when=move || cart.with(|c| !c.lines().is_empty())
                fallback=|| {
                    view! {
                        <div class="page__empty">
                            <p>"Your cart is empty."</p>
                            <a href="/" class="btn btn--primary">"Continue Shopping"</a>
                        </div>
                    }
                }
            >
                <ul class="cart__lines">{lines}</ul>
                <p class="cart__subtotal">
                    "Subtotal: " {move || format_price(cart.with(CartStore::subtotal))}
                </p>
            </Show>
        </main>
    }
}
