//! Read-only wrapper over the externally supplied product list.
//!
//! The catalog source is out of scope for this crate - callers hand over
//! either parsed [`Product`] values or the JSON document the source
//! provides. The wrapper only adds the lookups the browsing pages need:
//! detail-page lookup by id, the category rail, and the listing page's
//! combined category/search filter.

use std::collections::HashSet;

use stylehub_core::{Product, ProductId};

/// Errors that can occur when constructing a [`Catalog`].
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// The catalog document is not valid JSON of the expected shape.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The source listed the same product id more than once.
    #[error("duplicate product id {id} in catalog source")]
    DuplicateId {
        /// The id that appeared more than once.
        id: ProductId,
    },
}

/// An immutable product list in the source's listing order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap an already-parsed product list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId { id: product.id });
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from the JSON document the external source supplies
    /// (an array of product records).
    ///
    /// # Errors
    ///
    /// Returns an error if the document is malformed or contains duplicate
    /// product ids.
    pub fn from_json(document: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(document)?;
        Self::new(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products in listing order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|product| product.category.as_str())
            .filter(|category| seen.insert(*category))
            .collect()
    }

    /// The listing page's combined filter: category match (`None` matches
    /// everything) AND case-insensitive substring match on the name.
    #[must_use]
    pub fn filter(&self, category: Option<&str>, search: &str) -> Vec<&Product> {
        let needle = search.to_lowercase();
        self.products
            .iter()
            .filter(|product| category.is_none_or(|c| product.category == c))
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .collect()
    }
}
