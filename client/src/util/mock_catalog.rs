//! Placeholder product data until a catalog service is wired in.
//!
//! DESIGN
//! ======
//! Listing data is drawn from a seeded `StdRng` so one page load always sees
//! the same products. Pages generate once on mount (or on navigation to a new
//! category) and keep the result in a signal; re-rendering never regenerates.

#[cfg(test)]
#[path = "mock_catalog_test.rs"]
mod mock_catalog_test;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::state::catalog::{BRANDS, Category, ColorOption, PRODUCT_KINDS, Product, ProductDetail, SizeOption};

/// Products generated per listing page load.
pub const LISTING_SIZE: u32 = 12;

/// First id of the home and related-products showcase rows, clear of every
/// category block.
/// Cards in the detail page's related-products strip.
pub const RELATED_COUNT: usize = 4;

pub const SHOWCASE_ID_BASE: u32 = 900;

pub const COLLECTION_IMAGE: &str = "/assets/collection-showcase.jpg";

/// Seed for a page load of `category`.
///
/// Mixes the category into the browser clock so two listings loaded at the
/// same instant still differ. Outside the browser the clock reads as zero and
/// the seed depends on the category alone.
pub fn page_load_seed(category: Category) -> u64 {
    let salt = category
        .slug()
        .bytes()
        .fold(0xcbf2_9ce4_8422_2325_u64, |hash, b| (hash ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3));
    salt ^ clock_ms()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clock_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Generate the listing for `category` from `seed`.
pub fn listing_products(category: Category, seed: u64) -> Vec<Product> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..=LISTING_SIZE)
        .map(|n| generate_product(&mut rng, category, category.id_base() + n, n))
        .collect()
}

/// `n` is the 1-based position in the listing; `id` is the catalog-wide key.
fn generate_product(rng: &mut StdRng, category: Category, id: u32, n: u32) -> Product {
    let index = (n - 1) as usize;
    let price = rng.random_range(50..250);
    let original_price = rng.random_bool(0.5).then(|| rng.random_range(200..300));
    let rating = 4.0 + rng.random::<f64>();
    let reviews = rng.random_range(10..210);
    let is_new = rng.random_bool(0.3);
    let in_stock = rng.random_bool(0.9);

    Product {
        id,
        name: format!("{} Item {n}", category.title()),
        brand: BRANDS[index % BRANDS.len()].to_owned(),
        kind: PRODUCT_KINDS[index % PRODUCT_KINDS.len()].to_owned(),
        price,
        original_price,
        rating,
        reviews,
        image: COLLECTION_IMAGE.to_owned(),
        colors: ["Black", "White", "Grey"].map(str::to_owned).to_vec(),
        sizes: ["S", "M", "L", "XL"].map(str::to_owned).to_vec(),
        is_new,
        in_stock,
    }
}

/// Showcase rows for the home page and the "You may also like" strip.
pub fn showcase_products(seed: u64, count: usize) -> Vec<Product> {
    let names = ["Essential Overshirt", "Tapered Cargo", "Wool Blend Coat", "Canvas Tote"];
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let n = u32::try_from(i + 1).unwrap_or(u32::MAX);
            let mut product = generate_product(&mut rng, Category::Collections, SHOWCASE_ID_BASE.saturating_add(n), n);
            product.name = names[i % names.len()].to_owned();
            product.brand = BRANDS[0].to_owned();
            product.in_stock = true;
            product
        })
        .collect()
}

/// "You May Also Like" strip for the detail page of `product_id`.
pub fn related_products(product_id: u32) -> Vec<Product> {
    showcase_products(u64::from(product_id), RELATED_COUNT)
}

/// The detail record shown for every `/product/:id`.
///
/// The id is echoed back but does not select a different record.
pub fn product_detail(id: u32) -> ProductDetail {
    let colors = [("Black", "#000000"), ("Navy", "#1e3a8a"), ("Grey", "#6b7280"), ("Camel", "#d97706")];
    let sizes = [("XS", true), ("S", true), ("M", true), ("L", false), ("XL", true)];

    ProductDetail {
        id,
        name: "Minimalist Blazer".to_owned(),
        brand: "UrbanThreadz".to_owned(),
        price: 189,
        original_price: Some(229),
        rating: 4.8,
        reviews: 124,
        description: "A contemporary take on the classic blazer, crafted from premium sustainable materials. \
                      This piece combines modern minimalism with exceptional comfort, perfect for both \
                      professional and casual settings."
            .to_owned(),
        images: vec![COLLECTION_IMAGE.to_owned(); 4],
        colors: colors
            .into_iter()
            .map(|(name, swatch)| ColorOption { name: name.to_owned(), swatch: swatch.to_owned() })
            .collect(),
        sizes: sizes
            .into_iter()
            .map(|(name, in_stock)| SizeOption { name: name.to_owned(), in_stock })
            .collect(),
        features: [
            "Premium sustainable materials",
            "Tailored fit with stretch comfort",
            "Wrinkle-resistant fabric",
            "Dry clean or machine washable",
        ]
        .map(str::to_owned)
        .to_vec(),
        in_stock: true,
        delivery_info: "Free delivery on orders over $100".to_owned(),
        materials: "65% Recycled Polyester, 30% Organic Cotton, 5% Elastane".to_owned(),
        fit: "Tailored fit with slight stretch for comfort. Model is 5'9\" wearing size S.".to_owned(),
        care: [
            "Machine wash cold with like colors",
            "Do not bleach",
            "Tumble dry low",
            "Iron on low heat if needed",
            "Dry clean if preferred",
        ]
        .map(str::to_owned)
        .to_vec(),
    }
}
