//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and delegates rendering details to
//! `components`. Only the cart and wishlist stores outlive a page.

pub mod cart;
pub mod category;
pub mod home;
pub mod not_found;
pub mod placeholder;
pub mod product_detail;
pub mod wishlist;
