//! Wishlist store shared through context.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use std::collections::BTreeSet;

/// Wishlisted product ids for the current browser session.
#[derive(Clone, Debug, Default)]
pub struct WishlistStore {
    ids: BTreeSet<u32>,
}

impl WishlistStore {
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, product_id: u32) -> bool {
        self.ids.contains(&product_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.ids.iter().copied()
    }

    /// Flip membership of `product_id`; returns whether it is now wishlisted.
    pub fn toggle(&mut self, product_id: u32) -> bool {
        let added = if self.ids.remove(&product_id) {
            false
        } else {
            self.ids.insert(product_id);
            true
        };
        leptos::logging::log!("wishlist:toggle product={product_id} wishlisted={added}");
        added
    }
}
