//! Horizontal strip of product cards used on the home and detail pages.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::state::catalog::Product;

#[component]
pub fn ProductShowcase(title: &'static str, products: Vec<Product>) -> impl IntoView {
    view! {
        <section class="showcase">
            <h2 class="showcase__title">{title}</h2>
            <div class="showcase__grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
