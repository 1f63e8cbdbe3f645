//! Category listing toolbar, filter, sort, and pagination state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The category page owns one `ListingState` and derives the rendered product
//! window from it with [`ListingState::visible_products`] and
//! [`ListingState::page_slice`]. The generated product list itself is held
//! separately and never mutated by these controls.
//!
//! DESIGN
//! ======
//! Facet selections combine as OR within a group and AND across groups, the
//! usual storefront checkbox semantics. Any change to the result set sends the
//! user back to page 1.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use std::collections::BTreeSet;

use crate::state::catalog::{Facet, Product};

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 500;
pub const PRICE_STEP: u32 = 10;
pub const PAGE_SIZE: usize = 12;

/// Tile grid or row list rendering of product cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Sort options offered by the toolbar dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Generation order.
    #[default]
    Featured,
    PriceLowHigh,
    PriceHighLow,
    /// New products first, otherwise generation order.
    Newest,
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::Newest,
        SortKey::Rating,
    ];

    /// `<option value>` used by the dropdown.
    pub fn value(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLowHigh => "price-low",
            SortKey::PriceHighLow => "price-high",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::Newest => "Newest",
            SortKey::Rating => "Best Rating",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.value() == value)
    }
}

/// Listing controls for one category page.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingState {
    pub show_filters: bool,
    pub view_mode: ViewMode,
    pub sort: SortKey,
    /// Inclusive `(low, high)` price bounds, always ordered and on the step grid.
    pub price_range: (u32, u32),
    /// Checked `(facet, option)` pairs.
    pub facets: BTreeSet<(Facet, String)>,
    /// 1-based page number.
    pub page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            show_filters: false,
            view_mode: ViewMode::Grid,
            sort: SortKey::Featured,
            price_range: (PRICE_MIN, PRICE_MAX),
            facets: BTreeSet::new(),
            page: 1,
        }
    }
}

impl ListingState {
    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    /// Switch layout. Returns `false` when `mode` was already active.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        true
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        if self.sort != sort {
            self.sort = sort;
            self.page = 1;
        }
    }

    /// Move the lower bound; it never passes the upper bound.
    pub fn set_price_min(&mut self, value: u32) {
        let lo = snap_price(value).min(self.price_range.1);
        self.set_price_range(lo, self.price_range.1);
    }

    /// Move the upper bound; it never passes the lower bound.
    pub fn set_price_max(&mut self, value: u32) {
        let hi = snap_price(value).max(self.price_range.0);
        self.set_price_range(self.price_range.0, hi);
    }

    fn set_price_range(&mut self, lo: u32, hi: u32) {
        if self.price_range != (lo, hi) {
            self.price_range = (lo, hi);
            self.page = 1;
        }
    }

    pub fn is_facet_checked(&self, facet: Facet, option: &str) -> bool {
        self.facets.iter().any(|(f, o)| *f == facet && o == option)
    }

    pub fn toggle_facet(&mut self, facet: Facet, option: &str) {
        let key = (facet, option.to_owned());
        if !self.facets.remove(&key) {
            self.facets.insert(key);
        }
        self.page = 1;
    }

    /// "Clear All Filters": price range, facets, and page go back to defaults.
    /// Layout, sort, and panel visibility are kept.
    pub fn clear_filters(&mut self) {
        self.price_range = (PRICE_MIN, PRICE_MAX);
        self.facets.clear();
        self.page = 1;
    }

    pub fn has_active_filters(&self) -> bool {
        self.price_range != (PRICE_MIN, PRICE_MAX) || !self.facets.is_empty()
    }

    /// Filter and sort `products` according to the current controls.
    pub fn visible_products(&self, products: &[Product]) -> Vec<Product> {
        let (lo, hi) = self.price_range;
        let mut visible: Vec<Product> = products
            .iter()
            .filter(|p| p.price >= lo && p.price <= hi)
            .filter(|p| self.matches_facets(p))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Featured => {}
            SortKey::PriceLowHigh => visible.sort_by_key(|p| p.price),
            SortKey::PriceHighLow => visible.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Newest => visible.sort_by_key(|p| !p.is_new),
            SortKey::Rating => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
        visible
    }

    fn matches_facets(&self, product: &Product) -> bool {
        Facet::ALL.into_iter().all(|facet| {
            let mut selected = self.facets.iter().filter(|(f, _)| *f == facet).peekable();
            if selected.peek().is_none() {
                return true;
            }
            selected.any(|(_, option)| facet.matches(product, option))
        })
    }

    /// The current page's window into `visible`.
    pub fn page_slice<'a>(&self, visible: &'a [Product]) -> &'a [Product] {
        let page = self.page.clamp(1, page_count(visible.len()));
        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(visible.len());
        visible.get(start..end).unwrap_or(&[])
    }

    /// Go to `page`, clamped to `1..=page_count(total)`.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.clamp(1, page_count(total));
    }

    pub fn next_page(&mut self, total: usize) {
        self.set_page(self.page.saturating_add(1), total);
    }

    pub fn prev_page(&mut self, total: usize) {
        self.set_page(self.page.saturating_sub(1), total);
    }
}

/// Pages needed for `total` products; an empty result still has one page.
pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Round to the slider step and clamp into the slider range.
pub fn snap_price(value: u32) -> u32 {
    let snapped = (value.saturating_add(PRICE_STEP / 2) / PRICE_STEP) * PRICE_STEP;
    snapped.clamp(PRICE_MIN, PRICE_MAX)
}
