use super::*;
use crate::util::mock_catalog::product_detail;

// =============================================================
// Defaults
// =============================================================

#[test]
fn detail_state_defaults() {
    let state = DetailState::for_product(&product_detail(7));
    assert_eq!(state.selected_color, "Black");
    assert_eq!(state.selected_size, None);
    assert_eq!(state.quantity, 1);
    assert_eq!(state.image_index, 0);
    assert!(!state.in_wishlist);
    assert_eq!(state.active_tab, DetailTab::Description);
}

#[test]
fn for_product_picks_first_color() {
    let mut product = product_detail(1);
    product.colors.rotate_left(1);
    let state = DetailState::for_product(&product);
    assert_eq!(state.selected_color, "Navy");
}

// =============================================================
// Variants
// =============================================================

#[test]
fn out_of_stock_size_is_refused() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    assert!(!state.select_size(&product, "L"));
    assert_eq!(state.selected_size, None);
    assert!(!state.can_add_to_cart(&product));
}

#[test]
fn in_stock_size_is_selected_and_enables_add_to_cart() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    assert!(state.select_size(&product, "M"));
    assert_eq!(state.selected_size.as_deref(), Some("M"));
    assert!(state.can_add_to_cart(&product));

    assert!(!state.select_size(&product, "L"));
    assert_eq!(state.selected_size.as_deref(), Some("M"));
}

#[test]
fn unknown_size_is_refused() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    assert!(!state.select_size(&product, "XXXL"));
    assert_eq!(state.selected_size, None);
}

#[test]
fn select_color_ignores_unknown_names() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    state.select_color(&product, "Camel");
    assert_eq!(state.selected_color, "Camel");
    state.select_color(&product, "Magenta");
    assert_eq!(state.selected_color, "Camel");
}

// =============================================================
// Quantity and price
// =============================================================

#[test]
fn decrement_never_goes_below_one() {
    let mut state = DetailState::default();
    state.decrement();
    state.decrement();
    assert_eq!(state.quantity, 1);
}

#[test]
fn increment_has_no_ceiling() {
    let mut state = DetailState::default();
    for _ in 0..250 {
        state.increment();
    }
    assert_eq!(state.quantity, 251);
    state.decrement();
    assert_eq!(state.quantity, 250);
}

#[test]
fn total_price_tracks_quantity() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    assert_eq!(state.total_price(&product), 189);
    state.increment();
    state.increment();
    assert_eq!(state.total_price(&product), 567);
}

// =============================================================
// Gallery, wishlist, tabs
// =============================================================

#[test]
fn select_image_is_bounds_checked() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    state.select_image(&product, 3);
    assert_eq!(state.image_index, 3);
    state.select_image(&product, 4);
    assert_eq!(state.image_index, 3);
}

#[test]
fn toggle_wishlist_flips_once_per_call() {
    let mut state = DetailState::default();
    let mut store = WishlistStore::default();
    assert!(state.toggle_wishlist(&mut store, 7));
    assert!(store.contains(7));
    assert!(!state.toggle_wishlist(&mut store, 7));
    assert!(!store.contains(7));
}

#[test]
fn wishlist_flag_follows_toggles_from_other_views() {
    let mut state = DetailState::default();
    let mut store = WishlistStore::default();

    state.toggle_wishlist(&mut store, 2);
    // A related-products card removes the same id.
    store.toggle(2);
    assert!(state.sync_wishlist(&store, 2));
    assert_eq!(state.in_wishlist, store.contains(2));

    state.toggle_wishlist(&mut store, 2);
    assert!(state.in_wishlist);
    assert_eq!(state.in_wishlist, store.contains(2));
    assert!(!state.sync_wishlist(&store, 2));
}

#[test]
fn tabs_are_mutually_exclusive() {
    let mut state = DetailState::default();
    state.set_tab(DetailTab::Reviews);
    assert_eq!(state.active_tab, DetailTab::Reviews);
    state.set_tab(DetailTab::Details);
    assert_eq!(state.active_tab, DetailTab::Details);
    assert_eq!(DetailTab::Details.label(), "Details & Care");
}

// =============================================================
// Add to cart
// =============================================================

#[test]
fn add_to_cart_without_size_reports_missing_size() {
    let product = product_detail(7);
    let state = DetailState::for_product(&product);
    let err = state.add_to_cart(&product).unwrap_err();
    assert_eq!(err, AddToCartError::MissingSize);
    assert_eq!(err.to_string(), "Please select a size");
}

#[test]
fn add_to_cart_composes_current_selection() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    state.select_color(&product, "Navy");
    state.select_size(&product, "XL");
    state.increment();

    let line = state.add_to_cart(&product).unwrap();
    assert_eq!(line.product_id, 7);
    assert_eq!(line.product_name, "Minimalist Blazer");
    assert_eq!(line.size, "XL");
    assert_eq!(line.color, "Navy");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.unit_price, 189);
}

#[test]
fn add_to_cart_refuses_out_of_stock_product() {
    let mut product = product_detail(7);
    product.in_stock = false;
    let mut state = DetailState::for_product(&product);
    state.select_size(&product, "M");
    assert!(matches!(state.add_to_cart(&product), Err(AddToCartError::OutOfStock(_))));
}

// =============================================================
// Route parameter
// =============================================================

#[test]
fn parse_product_id_coerces_bad_input_to_zero() {
    assert_eq!(parse_product_id(Some("7")), 7);
    assert_eq!(parse_product_id(Some(" 12 ")), 12);
    assert_eq!(parse_product_id(Some("abc")), 0);
    assert_eq!(parse_product_id(Some("-3")), 0);
    assert_eq!(parse_product_id(None), 0);
}

// =============================================================
// Cart handoff
// =============================================================

#[derive(Default)]
struct RecordingCart {
    lines: Vec<CartLine>,
}

impl CartSink for RecordingCart {
    fn add_item(&mut self, line: CartLine) -> String {
        self.lines.push(line);
        format!("line-{}", self.lines.len())
    }
}

#[test]
fn submit_without_size_alerts_and_skips_cart() {
    let product = product_detail(7);
    let state = DetailState::for_product(&product);
    let mut cart = RecordingCart::default();
    let mut alerts = Vec::new();

    let result = submit_add_to_cart(&state, &product, &mut cart, |msg| alerts.push(msg.to_owned()));

    assert_eq!(result, None);
    assert!(cart.lines.is_empty());
    assert_eq!(alerts, vec!["Please select a size".to_owned()]);
}

#[test]
fn submit_with_size_hands_off_exactly_once() {
    let product = product_detail(7);
    let mut state = DetailState::for_product(&product);
    state.select_size(&product, "M");
    state.increment();
    state.increment();
    let mut cart = RecordingCart::default();
    let mut alerts = Vec::new();

    let result = submit_add_to_cart(&state, &product, &mut cart, |msg| alerts.push(msg.to_owned()));

    assert_eq!(result.as_deref(), Some("line-1"));
    assert!(alerts.is_empty());
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].size, "M");
    assert_eq!(cart.lines[0].color, "Black");
    assert_eq!(cart.lines[0].quantity, 3);
}
