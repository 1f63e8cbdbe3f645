//! Five-star rating row with a review count.

use leptos::prelude::*;

use crate::state::catalog::{MAX_STARS, full_stars};

#[component]
pub fn RatingStars(
    rating: f64,
    reviews: u32,
    /// Show the numeric rating before the count, as the detail page does.
    #[prop(optional)]
    show_value: bool,
) -> impl IntoView {
    let filled = full_stars(rating);
    let label = if show_value {
        format!("{rating:.1} ({reviews} reviews)")
    } else {
        format!("({reviews})")
    };

    view! {
        <div class="rating" aria-label=format!("{rating:.1} out of {MAX_STARS}")>
            <span class="rating__stars">
                {(0..MAX_STARS)
                    .map(|i| {
                        view! {
                            <span class="rating__star" class:rating__star--filled=i < filled>
                                "★"
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </span>
            <span class="rating__count">{label}</span>
        </div>
    }
}
