//! Catch-all page for unknown routes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    leptos::logging::warn!("404: no route for {path}");

    view! {
        <main class="page page--not-found">
            <h1 class="page__title">"404"</h1>
            <p>"Oops! Page not found"</p>
            <a href="/" class="btn btn--primary">"Return to Home"</a>
        </main>
    }
}
