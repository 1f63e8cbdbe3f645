//! Variant selection state for the product detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `DetailState` lives per mounted detail page. The page reads the product
//! record once and routes every button through the transitions below, so the
//! rules (no out-of-stock size, quantity floor, size required before adding to
//! the cart) hold regardless of which control fired.

#[cfg(test)]
#[path = "product_detail_test.rs"]
mod product_detail_test;

use crate::state::cart::{CartLine, CartSink};
use crate::state::catalog::ProductDetail;
use crate::state::wishlist::WishlistStore;

/// Informational tabs below the purchase panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    Description,
    Details,
    Reviews,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Description, DetailTab::Details, DetailTab::Reviews];

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::Details => "Details & Care",
            DetailTab::Reviews => "Reviews",
        }
    }
}

/// Why an add-to-cart request was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddToCartError {
    #[error("Please select a size")]
    MissingSize,
    #[error("{0} is out of stock")]
    OutOfStock(String),
}

/// Selection state for one product detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailState {
    pub selected_color: String,
    pub selected_size: Option<String>,
    /// Always at least 1.
    pub quantity: u32,
    pub image_index: usize,
    /// Mirror of the wishlist store entry for this product.
    pub in_wishlist: bool,
    pub active_tab: DetailTab,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            selected_color: "Black".to_owned(),
            selected_size: None,
            quantity: 1,
            image_index: 0,
            in_wishlist: false,
            active_tab: DetailTab::Description,
        }
    }
}

impl DetailState {
    /// Initial state for `product`: first color, no size.
    pub fn for_product(product: &ProductDetail) -> Self {
        let mut state = Self::default();
        if let Some(first) = product.colors.first() {
            state.selected_color.clone_from(&first.name);
        }
        state
    }

    /// Select a color offered by `product`; unknown names are ignored.
    pub fn select_color(&mut self, product: &ProductDetail, color: &str) {
        if product.has_color(color) {
            self.selected_color = color.to_owned();
        }
    }

    /// Select a size. Out-of-stock and unknown sizes are refused and leave
    /// the current selection unchanged. Returns whether the size was taken.
    pub fn select_size(&mut self, product: &ProductDetail, size: &str) -> bool {
        match product.size(size) {
            Some(option) if option.in_stock => {
                self.selected_size = Some(option.name.clone());
                true
            }
            _ => false,
        }
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    /// Show image `index`; ignored when `product` has no such image.
    pub fn select_image(&mut self, product: &ProductDetail, index: usize) {
        if index < product.images.len() {
            self.image_index = index;
        }
    }

    /// Flip `product_id` in `store` and mirror the store's answer.
    pub fn toggle_wishlist(&mut self, store: &mut WishlistStore, product_id: u32) -> bool {
        self.in_wishlist = store.toggle(product_id);
        self.in_wishlist
    }

    /// Re-read the wishlist flag after another view changed `store`.
    /// Returns whether the flag changed.
    pub fn sync_wishlist(&mut self, store: &WishlistStore, product_id: u32) -> bool {
        let saved = store.contains(product_id);
        if self.in_wishlist == saved {
            return false;
        }
        self.in_wishlist = saved;
        true
    }

    pub fn set_tab(&mut self, tab: DetailTab) {
        self.active_tab = tab;
    }

    /// Price shown on the add-to-cart button.
    pub fn total_price(&self, product: &ProductDetail) -> u32 {
        product.price.saturating_mul(self.quantity)
    }

    pub fn can_add_to_cart(&self, product: &ProductDetail) -> bool {
        product.in_stock && self.selected_size.is_some()
    }

    /// Compose the cart line for the current selection.
    ///
    /// # Errors
    ///
    /// [`AddToCartError::MissingSize`] when no size is selected, and
    /// [`AddToCartError::OutOfStock`] when the product cannot be ordered.
    pub fn add_to_cart(&self, product: &ProductDetail) -> Result<CartLine, AddToCartError> {
        if !product.in_stock {
            return Err(AddToCartError::OutOfStock(product.name.clone()));
        }
        let size = self.selected_size.clone().ok_or(AddToCartError::MissingSize)?;
        Ok(CartLine {
            line_id: String::new(),
            product_id: product.id,
            product_name: product.name.clone(),
            size,
            color: self.selected_color.clone(),
            quantity: self.quantity,
            unit_price: product.price,
        })
    }
}

/// Run the "Add to Cart" action.
///
/// A refused selection goes to `alert` and never reaches `cart`; an accepted
/// one is handed to `cart` exactly once. Returns the new line id on success.
pub fn submit_add_to_cart<C: CartSink>(
    state: &DetailState,
    product: &ProductDetail,
    cart: &mut C,
    alert: impl FnOnce(&str),
) -> Option<String> {
    match state.add_to_cart(product) {
        Ok(line) => Some(cart.add_item(line)),
        Err(e) => {
            alert(&e.to_string());
            None
        }
    }
}

/// Product id from the `:id` route segment. Non-numeric input is coerced to 0.
pub fn parse_product_id(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok()).unwrap_or(0)
}
