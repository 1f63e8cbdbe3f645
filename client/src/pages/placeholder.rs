//! Static pages for routes that have no backing service yet.

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod placeholder_test;

use leptos::prelude::*;

/// Routes rendered by [`PlaceholderPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Search,
    Auth,
    Profile,
}

impl Placeholder {
    pub fn title(self) -> &'static str {
        match self {
            Placeholder::Search => "Search",
            Placeholder::Auth => "Sign In",
            Placeholder::Profile => "Your Profile",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Placeholder::Search => "Product search is coming soon.",
            Placeholder::Auth => "Accounts are coming soon.",
            Placeholder::Profile => "Profiles are coming soon.",
        }
    }
}

#[component]
pub fn PlaceholderPage(page: Placeholder) -> impl IntoView {
    view! {
        <main class="page page--placeholder">
            <h1 class="page__title">{page.title()}</h1>
            <p class="page__empty">{page.message()}</p>
            <a href="/" class="btn btn--outline">"Back to Home"</a>
        </main>
    }
}
