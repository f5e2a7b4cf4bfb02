//! Catalog parsing, lookup, and the listing page's filter.

#![allow(clippy::unwrap_used)]

use stylehub_core::{Price, ProductId};
use stylehub_integration_tests::{CATALOG_JSON, sample_catalog};
use stylehub_session::{Catalog, CatalogError};

#[test]
fn test_sample_document_parses_in_listing_order() {
    let catalog = Catalog::from_json(CATALOG_JSON).unwrap();
    assert_eq!(catalog.len(), 6);

    let ids: Vec<i32> = catalog.products().iter().map(|p| p.id.as_i32()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);

    let headphones = catalog.get(ProductId::new(1)).unwrap();
    assert_eq!(headphones.name, "Premium Wireless Headphones");
    assert_eq!(headphones.price, Price::from_major(299));
}

#[test]
fn test_category_rail() {
    assert_eq!(
        sample_catalog().categories(),
        vec!["Electronics", "Accessories", "Furniture"]
    );
}

#[test]
fn test_listing_filter() {
    let catalog = sample_catalog();

    // No constraints: everything, in order.
    assert_eq!(catalog.filter(None, "").len(), 6);

    // Category only.
    let furniture = catalog.filter(Some("Furniture"), "");
    let ids: Vec<i32> = furniture.iter().map(|p| p.id.as_i32()).collect();
    assert_eq!(ids, vec![3, 6]);

    // Search is case-insensitive on the name.
    let laptops = catalog.filter(None, "LaPtOp");
    let ids: Vec<i32> = laptops.iter().map(|p| p.id.as_i32()).collect();
    assert_eq!(ids, vec![2, 4, 5]);

    // Combined.
    let electronics_laptops = catalog.filter(Some("Electronics"), "laptop");
    let ids: Vec<i32> = electronics_laptops.iter().map(|p| p.id.as_i32()).collect();
    assert_eq!(ids, vec![4, 5]);

    // No match.
    assert!(catalog.filter(Some("Electronics"), "sofa").is_empty());
}

#[test]
fn test_duplicate_ids_rejected_at_the_boundary() {
    let document = r#"[
        {"id": 1, "name": "First", "price": 10,
         "image": "https://images.example.com/1.jpg", "category": "A"},
        {"id": 1, "name": "Second", "price": 20,
         "image": "https://images.example.com/1b.jpg", "category": "B"}
    ]"#;

    assert!(matches!(
        Catalog::from_json(document),
        Err(CatalogError::DuplicateId { id }) if id == ProductId::new(1)
    ));
}

#[test]
fn test_malformed_document_is_a_typed_error() {
    let err = Catalog::from_json("{\"not\": \"an array\"}").unwrap_err();
    assert!(matches!(err, CatalogError::Malformed(_)));
    assert!(err.to_string().starts_with("malformed catalog document"));
}
