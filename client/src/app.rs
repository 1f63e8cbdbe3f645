//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header};
use crate::pages::{
    cart::CartPage,
    category::CategoryPage,
    home::HomePage,
    not_found::NotFoundPage,
    placeholder::{Placeholder, PlaceholderPage},
    product_detail::ProductDetailPage,
    wishlist::WishlistPage,
};
use crate::state::{cart::CartStore, catalog::Category, ui::UiState, wishlist::WishlistStore};

/// Root application component.
///
/// Provides the session-wide stores and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let cart = RwSignal::new(CartStore::default());
    let wishlist = RwSignal::new(WishlistStore::default());

    provide_context(ui);
    provide_context(cart);
    provide_context(wishlist);

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="UrbanThreadz"/>

        <Router>
            <Header/>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("men") view=|| view! { <CategoryPage category=Category::Men/> }/>
                <Route path=StaticSegment("women") view=|| view! { <CategoryPage category=Category::Women/> }/>
                <Route
                    path=StaticSegment("new-arrivals")
                    view=|| view! { <CategoryPage category=Category::NewArrivals/> }
                />
                <Route
                    path=StaticSegment("collections")
                    view=|| view! { <CategoryPage category=Category::Collections/> }
                />
                <Route path=StaticSegment("sale") view=|| view! { <CategoryPage category=Category::Sale/> }/>
                <Route path=(StaticSegment("product"), ParamSegment("id")) view=ProductDetailPage/>
                <Route path=StaticSegment("search") view=|| view! { <PlaceholderPage page=Placeholder::Search/> }/>
                <Route path=StaticSegment("cart") view=CartPage/>
                <Route path=StaticSegment("wishlist") view=WishlistPage/>
                <Route path=StaticSegment("auth") view=|| view! { <PlaceholderPage page=Placeholder::Auth/> }/>
                <Route path=StaticSegment("profile") view=|| view! { <PlaceholderPage page=Placeholder::Profile/> }/>
            </Routes>
            <Footer/>
        </Router>
    }
}
