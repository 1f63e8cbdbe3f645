//! Product summary card in tile-grid or row-list layout.
//!
//! DESIGN
//! ======
//! Card actions are optimistic: the cart line is handed to the store without
//! waiting for a confirmation. The heart reads the wishlist store directly, so
//! every card and the detail page showing the same id agree, and a toggle only
//! changes the entry for this card's id.

use leptos::prelude::*;

use crate::components::rating::RatingStars;
use crate::state::cart::{CartStore, quick_add_line};
use crate::state::catalog::{Product, format_price, swatch_class};
use crate::state::listing::ViewMode;
use crate::state::wishlist::WishlistStore;

/// Swatches shown before collapsing into a "+N" label.
const GRID_SWATCHES: usize = 3;
const LIST_SWATCHES: usize = 5;

/// One product summary linking to `/product/:id`.
#[component]
pub fn ProductCard(product: Product, #[prop(optional)] view_mode: ViewMode) -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();

    let product_id = product.id;
    let in_wishlist = move || wishlist.with(|w| w.contains(product_id));
    let hovered = RwSignal::new(false);

    let on_add_to_cart = Callback::new({
        let product = product.clone();
        move |()| {
            let Some(line) = quick_add_line(&product) else {
                return;
            };
            cart.update(|c| {
                c.add_item(line);
            });
        }
    });
    let on_toggle_wishlist = Callback::new(move |()| {
        wishlist.update(|w| {
            w.toggle(product_id);
        });
    });

    let href = format!("/product/{product_id}");
    let in_stock = product.in_stock;
    let is_new = product.is_new;
    let is_list = view_mode == ViewMode::List;
    let swatch_limit = if is_list { LIST_SWATCHES } else { GRID_SWATCHES };
    let extra_colors = product.colors.len().saturating_sub(swatch_limit);

    let swatches = product
        .colors
        .iter()
        .take(swatch_limit)
        .map(|color| {
            let class = format!("swatch {}", swatch_class(color));
            view! { <span class=class title=color.clone()></span> }
        })
        .collect::<Vec<_>>();

    let badges = view! {
        <div class="product-card__badges">
            <Show when=move || is_new>
                <span class="badge badge--accent">"New"</span>
            </Show>
            <Show when=move || !in_stock>
                <span class="badge badge--danger">"Out of Stock"</span>
            </Show>
        </div>
    };

    let wishlist_button = view! {
        <button
            class="btn btn--icon product-card__wishlist"
            class:product-card__wishlist--active=in_wishlist
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_toggle_wishlist.run(());
            }
            title="Toggle wishlist"
            aria-label="Toggle wishlist"
        >
            {move || if in_wishlist() { "♥" } else { "♡" }}
        </button>
    };

    let price = view! {
        <div class="product-card__price">
            <span class="product-card__amount">{format_price(product.price)}</span>
            {product
                .original_price
                .map(|original| view! { <span class="product-card__original">{format_price(original)}</span> })}
        </div>
    };

    view! {
        <a
            href=href
            class="product-card"
            class:product-card--list=is_list
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="product-card__media">
                <img class="product-card__image" src=product.image.clone() alt=product.name.clone()/>
                {badges}
                <Show when=move || !is_list>
                    <div class="product-card__overlay" class:product-card__overlay--visible=move || hovered.get()>
                        <AddToCartButton variant="btn btn--secondary" in_stock=in_stock on_add=on_add_to_cart/>
                        <span class="btn btn--icon btn--secondary" title="Quick view">"👁"</span>
                    </div>
                </Show>
            </div>

            <div class="product-card__info">
                <p class="product-card__brand">{product.brand.clone()}</p>
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <RatingStars rating=product.rating reviews=product.reviews/>
                <div class="product-card__swatches">
                    {swatches}
                    <Show when=move || { extra_colors > 0 }>
                        <span class="product-card__more">{format!("+{extra_colors}")}</span>
                    </Show>
                </div>
                <div class="product-card__footer">
                    {price}
                    <div class="product-card__actions">
                        {wishlist_button}
                        <Show when=move || is_list>
                            <AddToCartButton variant="btn btn--primary" in_stock=in_stock on_add=on_add_to_cart/>
                        </Show>
                    </div>
                </div>
            </div>
        </a>
    }
}

/// Add-to-cart button that keeps the click from following the card link.
#[component]
fn AddToCartButton(variant: &'static str, in_stock: bool, on_add: Callback<()>) -> impl IntoView {
    view! {
        <button
            class=variant
            disabled=!in_stock
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_add.run(());
            }
        >
            "Add to Cart"
        </button>
    }
}
