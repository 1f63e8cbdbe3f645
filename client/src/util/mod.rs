//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and placeholder data
//! from page and component logic. Browser calls sit behind the `csr` feature.

pub mod alert;
pub mod mock_catalog;
