//! Application state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! `cart`, `wishlist`, and `ui` are provided app-wide through Leptos context;
//! `hero`, `listing`, and `product_detail` are owned by the component or page
//! that renders them. `catalog` holds the display records all of them read.

pub mod cart;
pub mod catalog;
pub mod hero;
pub mod listing;
pub mod product_detail;
pub mod ui;
pub mod wishlist;
