use super::*;

#[test]
fn listing_has_twelve_sequential_products() {
    let products = listing_products(Category::Men, 7);
    assert_eq!(products.len(), 12);
    let ids: Vec<u32> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, (101..=112).collect::<Vec<_>>());
    assert_eq!(products[0].name, "Men Item 1");
    assert_eq!(products[11].name, "Men Item 12");
}

#[test]
fn listing_is_stable_for_a_seed() {
    let first = listing_products(Category::Women, 42);
    let second = listing_products(Category::Women, 42);
    assert_eq!(first, second);
}

#[test]
fn listing_differs_across_seeds() {
    let first = listing_products(Category::Women, 1);
    let second = listing_products(Category::Women, 2);
    assert_ne!(first, second);
}

#[test]
fn listing_values_stay_in_generator_ranges() {
    for seed in 0..20 {
        for product in listing_products(Category::Sale, seed) {
            assert!((50..250).contains(&product.price), "price {}", product.price);
            if let Some(original) = product.original_price {
                assert!((200..300).contains(&original), "original {original}");
            }
            assert!((4.0..5.0).contains(&product.rating), "rating {}", product.rating);
            assert!((10..210).contains(&product.reviews));
            assert_eq!(product.colors, vec!["Black", "White", "Grey"]);
            assert_eq!(product.sizes, vec!["S", "M", "L", "XL"]);
        }
    }
}

#[test]
fn listing_rotates_brand_and_kind() {
    let products = listing_products(Category::Men, 3);
    assert_eq!(products[0].brand, "UrbanThreadz");
    assert_eq!(products[1].brand, "Street Elite");
    assert_eq!(products[2].brand, "Minimal Co.");
    assert_eq!(products[3].brand, "UrbanThreadz");
    assert_eq!(products[0].kind, "Tops");
    assert_eq!(products[3].kind, "Accessories");
    assert_eq!(products[4].kind, "Tops");
}

#[test]
fn page_load_seed_without_browser_clock_depends_on_category() {
    assert_eq!(page_load_seed(Category::Men), page_load_seed(Category::Men));
    assert_ne!(page_load_seed(Category::Men), page_load_seed(Category::Women));
}

#[test]
fn product_ids_are_disjoint_across_categories_and_showcase() {
    let mut seen = std::collections::BTreeSet::new();
    for category in Category::ALL {
        for product in listing_products(category, 5) {
            assert!(seen.insert(product.id), "{} reuses id {}", product.name, product.id);
        }
    }
    for product in showcase_products(5, 8) {
        assert!(seen.insert(product.id), "{} reuses id {}", product.name, product.id);
    }
    assert_eq!(seen.len(), 5 * 12 + 8);
}

#[test]
fn same_position_in_two_categories_has_different_ids() {
    let men = listing_products(Category::Men, 1);
    let women = listing_products(Category::Women, 1);
    assert_eq!(men[2].name, "Men Item 3");
    assert_eq!(women[2].name, "Women Item 3");
    assert_ne!(men[2].id, women[2].id);
}

#[test]
fn showcase_products_are_in_stock_and_named() {
    let products = showcase_products(9, 4);
    assert_eq!(products.len(), 4);
    assert!(products.iter().all(|p| p.in_stock));
    assert_eq!(products[0].name, "Essential Overshirt");
    assert_eq!(products[3].name, "Canvas Tote");
}

#[test]
fn product_detail_is_the_fixed_blazer_for_any_id() {
    let detail = product_detail(7);
    assert_eq!(detail.id, 7);
    assert_eq!(detail.name, "Minimalist Blazer");
    assert_eq!(detail.price, 189);
    assert_eq!(detail.original_price, Some(229));
    assert_eq!(detail.images.len(), 4);
    assert_eq!(detail.colors[0].name, "Black");
    let sizes: Vec<(&str, bool)> = detail.sizes.iter().map(|s| (s.name.as_str(), s.in_stock)).collect();
    assert_eq!(sizes, vec![("XS", true), ("S", true), ("M", true), ("L", false), ("XL", true)]);

    let other = product_detail(99);
    assert_eq!(other.name, detail.name);
    assert_eq!(other.sizes, detail.sizes);
}

#[test]
fn related_products_follow_the_product_id() {
    let for_seven = related_products(7);
    assert_eq!(for_seven.len(), RELATED_COUNT);
    assert_eq!(for_seven, related_products(7));
    assert_ne!(for_seven, related_products(8));
}
