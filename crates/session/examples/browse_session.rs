//! Walks through a browsing session the way the UI drives it: listing,
//! favorites, cart mutations from several pages, and the checkout
//! hand-off summary.
//!
//! ```bash
//! RUST_LOG=debug cargo run -p stylehub-session --example browse_session
//! ```

use stylehub_core::{ProductId, Quantity};
use stylehub_session::{Catalog, CheckoutConfig, OrderSummary, SessionStore};
use tracing_subscriber::EnvFilter;

const CATALOG_JSON: &str = r#"[
    {"id": 1, "name": "Premium Wireless Headphones", "price": 299,
     "image": "https://images.example.com/headphones.jpg", "category": "Electronics"},
    {"id": 2, "name": "Modern Laptop Stand", "price": 89,
     "image": "https://images.example.com/stand.jpg", "category": "Accessories"},
    {"id": 3, "name": "Luxury Living Room Set", "price": 2499,
     "image": "https://images.example.com/sofa.jpg", "category": "Furniture"}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::from_json(CATALOG_JSON)?;
    let checkout = CheckoutConfig::from_env()?;
    let store = SessionStore::new();

    // The navigation badge holds a subscription for the item count.
    let mut badge = store.subscribe();

    // Listing page: browse and favorite.
    let headphones = catalog
        .get(ProductId::new(1))
        .ok_or("missing catalog entry")?;
    store.add_to_favorites(headphones);
    tracing::info!(
        favorites = store.snapshot().favorites().len(),
        "favorited from the listing page"
    );

    // Detail page: add two units, then one more from the listing card.
    store.add_to_cart(headphones, Quantity::new(2)?);
    let stand = catalog
        .get(ProductId::new(2))
        .ok_or("missing catalog entry")?;
    store.add_to_cart(stand, Quantity::ONE);

    if badge.has_changed()? {
        let state = badge.borrow_and_update();
        tracing::info!(items = state.total_items(), "badge updated");
    }

    // Cart page: bump the stand to three, then drop the headphones.
    store.update_cart_quantity(stand.id, 3);
    store.remove_from_cart(headphones.id);

    let summary = OrderSummary::for_cart(&store.snapshot(), &checkout);
    tracing::info!(
        items = summary.item_count,
        subtotal = %summary.subtotal,
        tax = %summary.tax,
        total = %summary.total,
        "handing off to checkout"
    );

    Ok(())
}
