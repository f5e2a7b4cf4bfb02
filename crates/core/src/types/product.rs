//! Catalog product records and cart line items.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId, Quantity};

/// A catalog item as supplied by the external product source.
///
/// Products are read-only to the session store: the store copies them into
/// favorites and cart lines but never modifies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Display asset reference (URL or path).
    pub image: String,
    /// Display category label.
    pub category: String,
}

/// A product snapshot plus quantity, owned by the cart.
///
/// The product fields are copied when the line is first created. A later
/// catalog change to the same product id does not retroactively update the
/// line - the cart is the user's snapshot of what they agreed to buy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Snapshot of the product at first insertion.
    pub product: Product,
    /// Units of this product in the cart, always at least 1.
    pub quantity: Quantity,
}

impl CartLine {
    /// Create a line from a product snapshot and an initial quantity.
    #[must_use]
    pub fn new(product: Product, quantity: Quantity) -> Self {
        Self { product, quantity }
    }

    /// The id of the product this line holds.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Line subtotal: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }
}
