//! Full-bleed hero carousel for the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `HeroState` signal. In the browser a timer loop advances it every
//! `AUTO_ADVANCE_MS`; the loop is stopped through an alive flag on cleanup so
//! an unmounted carousel never touches its disposed signal.

use leptos::prelude::*;

use crate::state::hero::{HeroState, SLIDES};

/// Rotating hero banner with arrows and indicator dots.
#[component]
pub fn HeroCarousel() -> impl IntoView {
    let hero = RwSignal::new(HeroState::default());

    #[cfg(feature = "csr")]
    {
        use crate::state::hero::AUTO_ADVANCE_MS;

        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(AUTO_ADVANCE_MS))).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                hero.update(HeroState::advance);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let current = move || hero.with(HeroState::current);

    view! {
        <section class="hero">
            {SLIDES
                .iter()
                .enumerate()
                .map(|(index, slide)| {
                    view! {
                        <div class="hero__slide" class:hero__slide--active=move || current() == index>
                            <div
                                class="hero__image"
                                style=format!("background-image: url({})", slide.image)
                            ></div>
                            <div class="hero__overlay"></div>
                            <div class="hero__content">
                                <h1 class="hero__title">{slide.title}</h1>
                                <p class="hero__subtitle">{slide.subtitle}</p>
                                <div class="hero__actions">
                                    <a href=slide.primary_href class="btn btn--hero">
                                        {slide.primary_cta}
                                    </a>
                                    <a href=slide.secondary_href class="btn btn--secondary">
                                        {slide.secondary_cta}
                                    </a>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}

            <button
                class="hero__arrow hero__arrow--prev"
                on:click=move |_| hero.update(HeroState::prev)
                aria-label="Previous slide"
            >
                "‹"
            </button>
            <button
                class="hero__arrow hero__arrow--next"
                on:click=move |_| hero.update(HeroState::next)
                aria-label="Next slide"
            >
                "›"
            </button>

            <div class="hero__dots">
                {(0..SLIDES.len())
                    .map(|index| {
                        view! {
                            <button
                                class="hero__dot"
                                class:hero__dot--active=move || current() == index
                                on:click=move |_| hero.update(|h| h.go_to(index))
                                aria-label=format!("Go to slide {}", index + 1)
                            ></button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
