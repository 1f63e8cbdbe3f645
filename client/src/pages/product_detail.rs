//! Product detail page: gallery, variant pickers, quantity, and info tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route: `/product/:id`. The id is parsed leniently and used to look up the
//! detail record. All selection lives in one `DetailState` signal that is reset
//! whenever the id changes, so navigating between products never carries a
//! size or quantity over.
//!
//! DESIGN
//! ======
//! Buttons only forward to `DetailState` transitions. The transitions refuse
//! invalid input (out-of-stock sizes, quantity below one), so a disabled
//! button that still fires cannot break the rules.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::product_showcase::ProductShowcase;
use crate::components::rating::RatingStars;
use crate::state::cart::CartStore;
use crate::state::catalog::{ProductDetail, format_price};
use crate::state::product_detail::{DetailState, DetailTab, parse_product_id, submit_add_to_cart};
use crate::state::wishlist::WishlistStore;
use crate::util::alert::blocking_alert;
use crate::util::mock_catalog::{product_detail, related_products};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let cart = expect_context::<RwSignal<CartStore>>();
    let wishlist = expect_context::<RwSignal<WishlistStore>>();
    let params = use_params_map();

    let product_id = Memo::new(move |_| parse_product_id(params.read().get("id").as_deref()));
    let product = Memo::new(move |_| product_detail(product_id.get()));
    let detail = RwSignal::new(DetailState::default());

    Effect::new(move || {
        let mut state = product.with(DetailState::for_product);
        let id = product_id.get_untracked();
        wishlist.with_untracked(|w| state.sync_wishlist(w, id));
        detail.set(state);
    });
    // Cards elsewhere on the page and the wishlist page write the same store.
    Effect::new(move || {
        let id = product_id.get();
        wishlist.with(|w| detail.maybe_update(|d| d.sync_wishlist(w, id)));
    });

    let on_add_to_cart = move |_: leptos::ev::MouseEvent| {
        let mut sink = cart;
        product.with_untracked(|p| {
            submit_add_to_cart(&detail.get_untracked(), p, &mut sink, blocking_alert);
        });
    };
    let on_toggle_wishlist = move |_: leptos::ev::MouseEvent| {
        let id = product_id.get_untracked();
        wishlist.update(|w| {
            detail.update(|d| {
                d.toggle_wishlist(w, id);
            });
        });
    };

    // Following a related link keeps this page mounted; only the param changes.
    let related = move || {
        let products = related_products(product_id.get());
        view! { <ProductShowcase title="You May Also Like" products=products/> }
    };

    view! {
        <main class="page page--detail">
            <div class="detail">
                <Gallery product=product detail=detail/>

                <div class="detail__info">
                    <span class="badge badge--secondary">{move || product.with(|p| p.brand.clone())}</span>
                    <h1 class="detail__name">{move || product.with(|p| p.name.clone())}</h1>
                    {move || product.with(|p| view! { <RatingStars rating=p.rating reviews=p.reviews show_value=true/> })}
                    <PriceBlock product=product/>

                    <VariantPickers product=product detail=detail/>

                    <div class="detail__quantity">
                        <h3>"Quantity"</h3>
                        <div class="stepper">
                            <button
                                class="btn btn--outline btn--icon"
                                on:click=move |_| detail.update(DetailState::decrement)
                                aria-label="Decrease quantity"
                            >
                                "−"
                            </button>
                            <span class="stepper__value">{move || detail.with(|d| d.quantity)}</span>
                            <button
                                class="btn btn--outline btn--icon"
                                on:click=move |_| detail.update(DetailState::increment)
                                aria-label="Increase quantity"
                            >
                                "+"
                            </button>
                        </div>
                    </div>

                    <div class="detail__actions">
                        <button
                            class="btn btn--primary btn--wide"
                            disabled=move || !product.with(|p| p.in_stock)
                            on:click=on_add_to_cart
                        >
                            {move || {
                                let total = product.with(|p| detail.with(|d| d.total_price(p)));
                                format!("Add to Cart - {}", format_price(total))
                            }}
                        </button>
                        <button class="btn btn--outline" on:click=on_toggle_wishlist>
                            {move || {
                                if detail.with(|d| d.in_wishlist) { "♥ Remove from Wishlist" } else { "♡ Add to Wishlist" }
                            }}
                        </button>
                    </div>

                    <ul class="detail__delivery">
                        <li>{move || product.with(|p| p.delivery_info.clone())}</li>
                        <li>"30-day return policy"</li>
                        <li>"2-year warranty included"</li>
                    </ul>
                </div>
            </div>

            <InfoTabs product=product detail=detail/>

            {related}
        </main>
    }
}

#[component]
fn Gallery(product: Memo<ProductDetail>, detail: RwSignal<DetailState>) -> impl IntoView {
    let main_image = move || {
        let index = detail.with(|d| d.image_index);
        product.with(|p| p.images.get(index).or_else(|| p.images.first()).cloned().unwrap_or_default())
    };

    view! {
        <div class="gallery">
            <img class="gallery__main" src=main_image alt=move || product.with(|p| p.name.clone())/>
            <div class="gallery__thumbs">
                {move || {
                    product
                        .with(|p| p.images.clone())
                        .into_iter()
                        .enumerate()
                        .map(|(index, image)| {
                            view! {
                                <button
                                    class="gallery__thumb"
                                    class:gallery__thumb--active=move || detail.with(|d| d.image_index == index)
                                    on:click=move |_| {
                                        product.with_untracked(|p| detail.update(|d| d.select_image(p, index)));
                                    }
                                >
                                    <img src=image alt=format!("View {}", index + 1)/>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

#[component]
fn PriceBlock(product: Memo<ProductDetail>) -> impl IntoView {
    move || {
        product.with(|p| {
            let original = p.original_price.map(|o| view! { <span class="detail__original">{format_price(o)}</span> });
            let saving = p
                .discount()
                .map(|d| view! { <span class="badge badge--danger">{format!("Save {}", format_price(d))}</span> });
            view! {
                <div class="detail__price">
                    <span class="detail__amount">{format_price(p.price)}</span>
                    {original}
                    {saving}
                </div>
            }
        })
    }
}

/// Color swatches and size buttons. Out-of-stock sizes render disabled.
#[component]
fn VariantPickers(product: Memo<ProductDetail>, detail: RwSignal<DetailState>) -> impl IntoView {
    let colors = move || {
        product
            .with(|p| p.colors.clone())
            .into_iter()
            .map(|color| {
                let name = color.name.clone();
                let selected_name = color.name.clone();
                view! {
                    <button
                        class="swatch swatch--large"
                        class:swatch--selected=move || detail.with(|d| d.selected_color == selected_name)
                        style=format!("background-color: {}", color.swatch)
                        title=color.name.clone()
                        on:click=move |_| {
                            product.with_untracked(|p| detail.update(|d| d.select_color(p, &name)));
                        }
                    ></button>
                }
            })
            .collect::<Vec<_>>()
    };

    let sizes = move || {
        product
            .with(|p| p.sizes.clone())
            .into_iter()
            .map(|size| {
                let name = size.name.clone();
                let selected_name = size.name.clone();
                view! {
                    <button
                        class="btn btn--outline btn--size"
                        class:btn--active=move || detail.with(|d| d.selected_size.as_deref() == Some(selected_name.as_str()))
                        disabled=!size.in_stock
                        on:click=move |_| {
                            product.with_untracked(|p| {
                                detail.update(|d| {
                                    d.select_size(p, &name);
                                });
                            });
                        }
                    >
                        {size.name.clone()}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="detail__picker">
            <h3>{move || format!("Color: {}", detail.with(|d| d.selected_color.clone()))}</h3>
            <div class="detail__swatches">{colors}</div>
        </div>
        <div class="detail__picker">
            <h3>"Size"</h3>
            <div class="detail__sizes">{sizes}</div>
            <p class="detail__hint">"Need help with sizing? " <a href="#">"Size Guide"</a></p>
        </div>
    }
}

#[component]
fn InfoTabs(product: Memo<ProductDetail>, detail: RwSignal<DetailState>) -> impl IntoView {
    let active = move || detail.with(|d| d.active_tab);

    let body = move || match active() {
        DetailTab::Description => product.with(|p| {
            let features = p.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect::<Vec<_>>();
            view! {
                <div class="tabs__panel">
                    <p class="detail__description">{p.description.clone()}</p>
                    <h4>"Key Features:"</h4>
                    <ul class="detail__features">{features}</ul>
                </div>
            }
            .into_any()
        }),
        DetailTab::Details => product.with(|p| {
            let care = p.care.iter().map(|c| view! { <li>{c.clone()}</li> }).collect::<Vec<_>>();
            view! {
                <div class="tabs__panel tabs__panel--split">
                    <div>
                        <h4>"Materials"</h4>
                        <p>{p.materials.clone()}</p>
                        <h4>"Fit"</h4>
                        <p>{p.fit.clone()}</p>
                    </div>
                    <div>
                        <h4>"Care Instructions"</h4>
                        <ul>{care}</ul>
                    </div>
                </div>
            }
            .into_any()
        }),
        DetailTab::Reviews => view! {
            <div class="tabs__panel">
                <h4>"Customer Reviews"</h4>
                <p class="detail__hint">"Reviews are not available yet."</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="tabs">
            <div class="tabs__list" role="tablist">
                {DetailTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || active() == tab
                                role="tab"
                                on:click=move |_| detail.update(|d| d.set_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {body}
        </section>
    }
}
