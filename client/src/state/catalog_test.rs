use super::*;

fn sample_product() -> Product {
    Product {
        id: 1,
        name: "Men Item 1".to_owned(),
        brand: "UrbanThreadz".to_owned(),
        kind: "Tops".to_owned(),
        price: 120,
        original_price: Some(220),
        rating: 4.6,
        reviews: 42,
        image: "/assets/collection-showcase.jpg".to_owned(),
        colors: vec!["Black".to_owned(), "White".to_owned()],
        sizes: vec!["S".to_owned(), "M".to_owned()],
        is_new: false,
        in_stock: true,
    }
}

// =============================================================
// Product helpers
// =============================================================

#[test]
fn discount_is_difference_to_original_price() {
    assert_eq!(sample_product().discount(), Some(100));
}

#[test]
fn discount_is_none_without_original_price() {
    let product = Product { original_price: None, ..sample_product() };
    assert_eq!(product.discount(), None);
}

#[test]
fn discount_is_none_when_original_price_is_not_higher() {
    let product = Product { original_price: Some(100), ..sample_product() };
    assert_eq!(product.discount(), None);
}

#[test]
fn full_stars_floors_and_clamps() {
    assert_eq!(full_stars(4.99), 4);
    assert_eq!(full_stars(5.0), 5);
    assert_eq!(full_stars(7.2), 5);
    assert_eq!(full_stars(-1.0), 0);
    assert_eq!(full_stars(f64::NAN), 0);
    assert_eq!(sample_product().full_stars(), 4);
}

// =============================================================
// Category
// =============================================================

#[test]
fn category_slugs_round_trip() {
    for category in Category::ALL {
        assert_eq!(Category::from_slug(category.slug()), Some(category));
    }
    assert_eq!(Category::from_slug("kids"), None);
}

#[test]
fn category_href_has_leading_slash() {
    assert_eq!(Category::NewArrivals.href(), "/new-arrivals");
    assert_eq!(Category::NewArrivals.title(), "New Arrivals");
}

// =============================================================
// Facets
// =============================================================

#[test]
fn facet_matches_against_product_fields() {
    let product = sample_product();
    assert!(Facet::Category.matches(&product, "Tops"));
    assert!(!Facet::Category.matches(&product, "Bottoms"));
    assert!(Facet::Size.matches(&product, "M"));
    assert!(!Facet::Size.matches(&product, "XXL"));
    assert!(Facet::Color.matches(&product, "White"));
    assert!(!Facet::Color.matches(&product, "Navy"));
    assert!(Facet::Brand.matches(&product, "UrbanThreadz"));
    assert!(!Facet::Brand.matches(&product, "Minimal Co."));
}

#[test]
fn facet_options_match_sidebar_lists() {
    assert_eq!(Facet::Size.options(), &["XS", "S", "M", "L", "XL", "XXL"]);
    assert_eq!(Facet::Brand.options().len(), 3);
    assert_eq!(Facet::Category.options().len(), 4);
}

#[test]
fn swatch_class_falls_back_to_grey() {
    assert_eq!(swatch_class("Navy"), "swatch--navy");
    assert_eq!(swatch_class("Grey"), "swatch--grey");
    assert_eq!(swatch_class("Magenta"), "swatch--grey");
}

#[test]
fn format_price_uses_whole_dollars() {
    assert_eq!(format_price(189), "$189");
}
