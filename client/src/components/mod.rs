//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and product surfaces while reading or
//! writing the shared stores from Leptos context providers.

pub mod filter_panel;
pub mod footer;
pub mod header;
pub mod hero_carousel;
pub mod listing_toolbar;
pub mod pagination;
pub mod product_card;
pub mod product_showcase;
pub mod rating;
