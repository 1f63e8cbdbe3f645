//! Hero carousel position and slide content.
//!
//! DESIGN
//! ======
//! Every transition is modulo the slide count, so the timer tick, the arrow
//! buttons, and the indicator dots can never leave the index out of range.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Milliseconds between automatic advances.
pub const AUTO_ADVANCE_MS: u32 = 5_000;

/// One entry in the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub primary_cta: &'static str,
    pub primary_href: &'static str,
    pub secondary_cta: &'static str,
    pub secondary_href: &'static str,
}

pub const SLIDES: [Slide; 2] = [
    Slide {
        image: "/assets/hero-fashion-1.jpg",
        title: "Urban Elegance",
        subtitle: "Redefining Street Fashion",
        primary_cta: "Shop Men",
        primary_href: "/men",
        secondary_cta: "Shop Women",
        secondary_href: "/women",
    },
    Slide {
        image: "/assets/hero-fashion-2.jpg",
        title: "New Collection",
        subtitle: "Contemporary Streetwear",
        primary_cta: "Explore Now",
        primary_href: "/new-arrivals",
        secondary_cta: "View Lookbook",
        secondary_href: "/collections",
    },
];

/// Current slide index over a fixed slide count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroState {
    current: usize,
    len: usize,
}

impl Default for HeroState {
    fn default() -> Self {
        Self::new(SLIDES.len())
    }
}

impl HeroState {
    pub fn new(len: usize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Timer tick. Same transition as [`HeroState::next`].
    pub fn advance(&mut self) {
        self.next();
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
    }

    /// Jump to `index` from an indicator dot. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }
}
