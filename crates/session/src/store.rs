//! The shared session store.
//!
//! One [`SessionStore`] exists per browsing session. Pages and components
//! receive a clone of the handle (handles share the same underlying state)
//! and either call the query operations directly or hold a subscription
//! that yields a consistent [`SessionState`] snapshot after every change.

use stylehub_core::{CartLine, Price, Product, ProductId, Quantity};
use tokio::sync::watch;

/// A receiver yielding [`SessionState`] snapshots after each mutation.
///
/// Dropping the subscription unregisters the observer. Synchronous
/// consumers poll with `has_changed`/`borrow_and_update`; async consumers
/// await `changed`.
pub type StoreSubscription = watch::Receiver<SessionState>;

/// Favorites and cart as of one committed mutation.
///
/// Snapshots are immutable from the outside: the collections can only be
/// changed through [`SessionStore`] operations, so no consumer can bypass
/// the store's invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    favorites: Vec<Product>,
    cart: Vec<CartLine>,
}

impl SessionState {
    /// Favorited products, in the order they were added.
    #[must_use]
    pub fn favorites(&self) -> &[Product] {
        &self.favorites
    }

    /// Cart lines, in the order they were first added.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// Whether a favorite with this id exists.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.favorites.iter().any(|product| product.id == id)
    }

    /// Sum of `price × quantity` over all cart lines; `$0.00` when empty.
    ///
    /// Recomputed from the snapshot on every call.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all cart lines; `0` when empty.
    ///
    /// This is the number the cart badge shows.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.cart
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity.get()))
    }
}

/// The single source of truth for favorites and cart.
///
/// Cloning the store clones the handle, not the state: all clones observe
/// and mutate the same session. Both collections start empty and live for
/// the duration of the browsing session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct SessionStore {
    shared: watch::Sender<SessionState>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a store with empty favorites and an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: watch::Sender::new(SessionState::default()),
        }
    }

    /// Register an observer.
    ///
    /// The subscription starts at the current snapshot and is marked
    /// changed by every subsequent mutation that alters state.
    #[must_use]
    pub fn subscribe(&self) -> StoreSubscription {
        self.shared.subscribe()
    }

    /// Clone the current snapshot, for consumers that read once without
    /// subscribing.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.shared.borrow().clone()
    }

    /// Add a product to favorites.
    ///
    /// No-op if a favorite with that id already exists; the favorites
    /// collection contains each id at most once.
    pub fn add_to_favorites(&self, product: &Product) {
        self.shared.send_if_modified(|state| {
            if state.is_favorite(product.id) {
                return false;
            }
            state.favorites.push(product.clone());
            tracing::debug!(product_id = %product.id, "added to favorites");
            true
        });
    }

    /// Remove the favorite with this id. Idempotent; no-op if absent.
    pub fn remove_from_favorites(&self, id: ProductId) {
        self.shared.send_if_modified(|state| {
            let before = state.favorites.len();
            state.favorites.retain(|product| product.id != id);
            if state.favorites.len() == before {
                return false;
            }
            tracing::debug!(product_id = %id, "removed from favorites");
            true
        });
    }

    /// Whether a favorite with this id exists.
    #[must_use]
    pub fn is_favorite(&self, id: ProductId) -> bool {
        self.shared.borrow().is_favorite(id)
    }

    /// Add a product to the cart.
    ///
    /// If a line for that id already exists, the quantity is added to the
    /// existing line (saturating at `u32::MAX`) and the line keeps its
    /// original product snapshot. Otherwise a new line is appended.
    pub fn add_to_cart(&self, product: &Product, quantity: Quantity) {
        self.shared.send_if_modified(|state| {
            match state
                .cart
                .iter_mut()
                .find(|line| line.product_id() == product.id)
            {
                Some(line) => {
                    let updated = line.quantity.saturating_add(quantity);
                    if updated == line.quantity {
                        // already saturated, nothing to commit
                        return false;
                    }
                    line.quantity = updated;
                    tracing::debug!(
                        product_id = %product.id,
                        added = quantity.get(),
                        quantity = line.quantity.get(),
                        "aggregated into existing cart line"
                    );
                }
                None => {
                    state.cart.push(CartLine::new(product.clone(), quantity));
                    tracing::debug!(
                        product_id = %product.id,
                        quantity = quantity.get(),
                        "added new cart line"
                    );
                }
            }
            true
        });
    }

    /// Remove the cart line with this id. Idempotent; no-op if absent.
    pub fn remove_from_cart(&self, id: ProductId) {
        self.shared.send_if_modified(|state| {
            let before = state.cart.len();
            state.cart.retain(|line| line.product_id() != id);
            if state.cart.len() == before {
                return false;
            }
            tracing::debug!(product_id = %id, "removed from cart");
            true
        });
    }

    /// Set (not add) the quantity of the line with this id.
    ///
    /// A quantity of `0` is removal shorthand, equivalent to
    /// [`remove_from_cart`](Self::remove_from_cart). No-op if the id is
    /// absent. The cart page's stepper stopping at 1 is a view convenience;
    /// the store accepts any value here.
    pub fn update_cart_quantity(&self, id: ProductId, quantity: u32) {
        let Ok(quantity) = Quantity::new(quantity) else {
            self.remove_from_cart(id);
            return;
        };

        self.shared.send_if_modified(|state| {
            let Some(line) = state.cart.iter_mut().find(|line| line.product_id() == id)
            else {
                return false;
            };
            if line.quantity == quantity {
                return false;
            }
            line.quantity = quantity;
            tracing::debug!(product_id = %id, quantity = quantity.get(), "set cart quantity");
            true
        });
    }

    /// Empty the cart. Favorites are untouched.
    pub fn clear_cart(&self) {
        self.shared.send_if_modified(|state| {
            if state.cart.is_empty() {
                return false;
            }
            state.cart.clear();
            tracing::debug!("cleared cart");
            true
        });
    }

    /// Sum of `price × quantity` over all cart lines; `$0.00` when empty.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.shared.borrow().total_price()
    }

    /// Sum of quantities over all cart lines; `0` when empty.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.shared.borrow().total_items()
    }
}
