//! Local UI chrome state (header menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the cart and wishlist stores
//! so header controls can evolve independently of shopping data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Header links shown in both the desktop bar and the mobile menu.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Men", "/men"),
    ("Women", "/women"),
    ("New Arrivals", "/new-arrivals"),
    ("Collections", "/collections"),
    ("Sale", "/sale"),
];

/// UI state for the header.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub mobile_menu_open: bool,
    /// Draft text of the mobile search field.
    pub search_draft: String,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called when a navigation link is followed.
    pub fn close_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
