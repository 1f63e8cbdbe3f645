//! Site footer with shop and help links.

use leptos::prelude::*;

use crate::state::catalog::Category;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__columns">
                <div class="footer__brand">
                    <span class="footer__logo">"URBANTHREADZ"</span>
                    <p>"Contemporary streetwear for the modern city."</p>
                </div>
                <div class="footer__column">
                    <h4>"Shop"</h4>
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <a href=c.href()>{c.title()}</a> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="footer__column">
                    <h4>"Account"</h4>
                    <a href="/profile">"Profile"</a>
                    <a href="/wishlist">"Wishlist"</a>
                    <a href="/cart">"Cart"</a>
                </div>
            </div>
            <p class="footer__legal">"© UrbanThreadz. All rights reserved."</p>
        </footer>
    }
}
