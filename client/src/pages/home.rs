//! Landing page: hero carousel, featured products, and a collection banner.

use leptos::prelude::*;

use crate::components::hero_carousel::HeroCarousel;
use crate::components::product_showcase::ProductShowcase;
use crate::state::catalog::Category;
use crate::util::mock_catalog::{COLLECTION_IMAGE, page_load_seed, showcase_products};

const FEATURED_COUNT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = showcase_products(page_load_seed(Category::Collections), FEATURED_COUNT);

    view! {
        <main class="page page--home">
            <HeroCarousel/>
            <ProductShowcase title="Featured Collection" products=featured/>
            <section class="collection-banner">
                <img class="collection-banner__image" src=COLLECTION_IMAGE alt="Seasonal collection"/>
                <div class="collection-banner__content">
                    <h2>"The Seasonal Edit"</h2>
                    <p>"Pieces built for the city, from first light to last call."</p>
                    <a href=Category::Collections.href() class="btn btn--hero">
                        "Explore Collections"
                    </a>
                </div>
            </section>
        </main>
    }
}
