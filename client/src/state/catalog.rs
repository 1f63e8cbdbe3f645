//! Catalog display records for listing and detail views.
//!
//! SYSTEM CONTEXT
//! ==============
//! These records are what the storefront renders. They are produced locally by
//! `util::mock_catalog` until a catalog backend supplies real products; the
//! shape is kept serializable so that swap does not touch the views.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// Number of stars rendered for a rating.
pub const MAX_STARS: u8 = 5;

/// One product summary as rendered by a product card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub brand: String,
    /// Product kind, matched against the "Category" facet (Tops, Bottoms, ...).
    pub kind: String,
    pub price: u32,
    pub original_price: Option<u32>,
    /// Continuous rating in `0.0..=5.0`.
    pub rating: f64,
    pub reviews: u32,
    pub image: String,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub is_new: bool,
    pub in_stock: bool,
}

impl Product {
    /// Amount saved against the original price, if the product is on sale.
    pub fn discount(&self) -> Option<u32> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Filled stars for the rating row.
    pub fn full_stars(&self) -> u8 {
        full_stars(self.rating)
    }
}

/// A selectable color with its swatch value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorOption {
    pub name: String,
    /// CSS color used for the swatch background, e.g. `#1e3a8a`.
    pub swatch: String,
}

/// A size label and whether it can currently be ordered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub name: String,
    pub in_stock: bool,
}

/// Full record for the product detail page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDetail {
    pub id: u32,
    pub name: String,
    pub brand: String,
    pub price: u32,
    pub original_price: Option<u32>,
    pub rating: f64,
    pub reviews: u32,
    pub description: String,
    pub images: Vec<String>,
    pub colors: Vec<ColorOption>,
    pub sizes: Vec<SizeOption>,
    pub features: Vec<String>,
    pub in_stock: bool,
    pub delivery_info: String,
    pub materials: String,
    pub fit: String,
    pub care: Vec<String>,
}

impl ProductDetail {
    pub fn discount(&self) -> Option<u32> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    pub fn full_stars(&self) -> u8 {
        full_stars(self.rating)
    }

    /// Look up a size by label.
    pub fn size(&self, name: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.name == name)
    }

    pub fn has_color(&self, name: &str) -> bool {
        self.colors.iter().any(|c| c.name == name)
    }
}

/// Storefront departments, each backed by a listing route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Men,
    Women,
    NewArrivals,
    Collections,
    Sale,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Men,
        Category::Women,
        Category::NewArrivals,
        Category::Collections,
        Category::Sale,
    ];

    /// Page heading and product-name prefix.
    pub fn title(self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::NewArrivals => "New Arrivals",
            Category::Collections => "Collections",
            Category::Sale => "Sale",
        }
    }

    /// Route path segment, without the leading slash.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Men => "men",
            Category::Women => "women",
            Category::NewArrivals => "new-arrivals",
            Category::Collections => "collections",
            Category::Sale => "sale",
        }
    }

    /// First product id of this category's listing. Each category owns a
    /// block of 100 ids so products never share a cart or wishlist key.
    pub fn id_base(self) -> u32 {
        match self {
            Category::Men => 100,
            Category::Women => 200,
            Category::NewArrivals => 300,
            Category::Collections => 400,
            Category::Sale => 500,
        }
    }

    pub fn href(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Listing sidebar facet groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    Category,
    Size,
    Color,
    Brand,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Category, Facet::Size, Facet::Color, Facet::Brand];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Category => "Category",
            Facet::Size => "Size",
            Facet::Color => "Color",
            Facet::Brand => "Brand",
        }
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Facet::Category => &PRODUCT_KINDS,
            Facet::Size => &["XS", "S", "M", "L", "XL", "XXL"],
            Facet::Color => &["Black", "White", "Grey", "Navy", "Beige"],
            Facet::Brand => &BRANDS,
        }
    }

    /// Whether `product` carries `option` for this facet.
    pub fn matches(self, product: &Product, option: &str) -> bool {
        match self {
            Facet::Category => product.kind == option,
            Facet::Size => product.sizes.iter().any(|s| s == option),
            Facet::Color => product.colors.iter().any(|c| c == option),
            Facet::Brand => product.brand == option,
        }
    }
}

pub const PRODUCT_KINDS: [&str; 4] = ["Tops", "Bottoms", "Outerwear", "Accessories"];
pub const BRANDS: [&str; 3] = ["UrbanThreadz", "Street Elite", "Minimal Co."];

/// Swatch CSS class for a named color. Unknown names fall back to grey.
pub fn swatch_class(color: &str) -> &'static str {
    match color {
        "Black" => "swatch--black",
        "White" => "swatch--white",
        "Navy" => "swatch--navy",
        "Sage" => "swatch--sage",
        "Charcoal" => "swatch--charcoal",
        "Olive" => "swatch--olive",
        "Camel" => "swatch--camel",
        "Beige" => "swatch--beige",
        "Cream" => "swatch--cream",
        _ => "swatch--grey",
    }
}

/// Floor of `rating`, clamped to the star row.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn full_stars(rating: f64) -> u8 {
    if !rating.is_finite() {
        return 0;
    }
    rating.floor().clamp(0.0, f64::from(MAX_STARS)) as u8
}

/// Price label in whole dollars.
pub fn format_price(amount: u32) -> String {
    format!("${amount}")
}
