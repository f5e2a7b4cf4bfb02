//! Integration tests for StyleHub.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stylehub-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `browsing_flow` - End-to-end listing → detail → cart → checkout flows
//! - `favorites` - Favorites collection behavior across pages
//! - `store_observers` - Snapshot broadcast and subscription semantics
//! - `catalog` - Catalog parsing, lookup, and filtering
//!
//! This crate's library part holds the shared fixtures: the sample catalog
//! the page-level tests browse against.

#![cfg_attr(not(test), forbid(unsafe_code))]

use stylehub_core::{Price, Product, ProductId};
use stylehub_session::Catalog;

/// The sample catalog document in the shape the external source supplies.
pub const CATALOG_JSON: &str = r#"[
    {"id": 1, "name": "Premium Wireless Headphones", "price": 299,
     "image": "https://images.example.com/headphones.jpg", "category": "Electronics"},
    {"id": 2, "name": "Modern Laptop Stand", "price": 89,
     "image": "https://images.example.com/stand.jpg", "category": "Accessories"},
    {"id": 3, "name": "Ergonomic Workspace Setup", "price": 199,
     "image": "https://images.example.com/workspace.jpg", "category": "Furniture"},
    {"id": 4, "name": "Professional Laptop", "price": 1299,
     "image": "https://images.example.com/laptop.jpg", "category": "Electronics"},
    {"id": 5, "name": "Designer Laptop Setup", "price": 1599,
     "image": "https://images.example.com/setup.jpg", "category": "Electronics"},
    {"id": 6, "name": "Luxury Living Room Set", "price": 2499,
     "image": "https://images.example.com/sofa.jpg", "category": "Furniture"}
]"#;

/// Parse the sample catalog.
///
/// # Panics
///
/// Panics if the embedded document is malformed, which would be a bug in
/// the fixture itself.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn sample_catalog() -> Catalog {
    Catalog::from_json(CATALOG_JSON).unwrap()
}

/// Look up a fixture product by id, panicking if the fixture is missing.
#[must_use]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used)]
pub fn fixture_product(catalog: &Catalog, id: i32) -> Product {
    catalog.get(ProductId::new(id)).unwrap().clone()
}

/// Build an ad-hoc product record outside the sample catalog.
#[must_use]
pub fn custom_product(id: i32, name: &str, price: i64, category: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_major(price),
        image: format!("https://images.example.com/{id}.jpg"),
        category: category.to_owned(),
    }
}
