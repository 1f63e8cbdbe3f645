//! Cart store shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Product cards and the detail page hand accepted selections to this store;
//! the header reads its count. Checkout and server-side carts are not wired
//! yet, so an accepted line is recorded locally and logged for the backend
//! integration to pick up.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::{RwSignal, Update};
use serde::{Deserialize, Serialize};

use crate::state::catalog::Product;

/// One accepted add-to-cart selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Local line id, assigned by [`CartStore::add_item`].
    #[serde(default)]
    pub line_id: String,
    pub product_id: u32,
    pub product_name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u32 {
        self.unit_price.saturating_mul(self.quantity)
    }
}

/// Receiver for accepted add-to-cart selections.
///
/// Implemented by [`CartStore`]; a backend-backed cart slots in here.
pub trait CartSink {
    /// Record `line` and return its line id.
    fn add_item(&mut self, line: CartLine) -> String;
}

/// Cart contents for the current browser session.
#[derive(Clone, Debug, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    /// Total units across all lines.
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn subtotal(&self) -> u32 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Accept a line and return the id it was recorded under.
    pub fn add_item(&mut self, mut line: CartLine) -> String {
        line.line_id = uuid::Uuid::new_v4().to_string();
        match serde_json::to_string(&line) {
            Ok(payload) => leptos::logging::log!("cart:add {payload}"),
            Err(e) => leptos::logging::warn!("cart:add for {} not serialized: {e}", line.product_name),
        }
        let id = line.line_id.clone();
        self.lines.push(line);
        id
    }
}

impl CartSink for CartStore {
    fn add_item(&mut self, line: CartLine) -> String {
        CartStore::add_item(self, line)
    }
}

/// The context-provided cart signal, so pages can hand lines to it directly.
impl CartSink for RwSignal<CartStore> {
    fn add_item(&mut self, line: CartLine) -> String {
        self.try_update(|c| c.add_item(line)).unwrap_or_default()
    }
}

/// One unit of a listing product, as added from a product card.
///
/// Cards have no variant pickers, so the first listed size and color are used.
/// Returns `None` when the product cannot be ordered.
pub fn quick_add_line(product: &Product) -> Option<CartLine> {
    if !product.in_stock {
        return None;
    }
    Some(CartLine {
        line_id: String::new(),
        product_id: product.id,
        product_name: product.name.clone(),
        size: product.sizes.first().cloned().unwrap_or_default(),
        color: product.colors.first().cloned().unwrap_or_default(),
        quantity: 1,
        unit_price: product.price,
    })
}
