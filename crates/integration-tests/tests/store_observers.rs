//! Snapshot broadcast and subscription semantics.
//!
//! Observers are watch-channel receivers: every committed mutation marks
//! them changed, and the snapshot they read is the whole post-mutation
//! state - never a partially applied one.

#![allow(clippy::unwrap_used)]

use stylehub_core::Quantity;
use stylehub_integration_tests::{custom_product, fixture_product, sample_catalog};
use stylehub_session::SessionStore;

// =============================================================================
// Synchronous Observers
// =============================================================================

#[test]
fn test_every_observer_sees_each_committed_change() {
    let catalog = sample_catalog();
    let store = SessionStore::new();

    let mut badge = store.subscribe();
    let mut cart_page = store.subscribe();

    store.add_to_cart(&fixture_product(&catalog, 1), Quantity::new(2).unwrap());

    for sub in [&mut badge, &mut cart_page] {
        assert!(sub.has_changed().unwrap());
        let state = sub.borrow_and_update();
        assert_eq!(state.total_items(), 2);
        assert_eq!(state.cart().len(), 1);
    }
}

#[test]
fn test_mutation_marks_receiver_changed_exactly_once() {
    let store = SessionStore::new();
    let mut sub = store.subscribe();

    store.add_to_cart(&custom_product(1, "Desk Lamp", 45, "Lighting"), Quantity::ONE);

    assert!(sub.has_changed().unwrap());
    sub.borrow_and_update();
    assert!(!sub.has_changed().unwrap());
}

#[test]
fn test_late_subscriber_starts_at_current_state() {
    let store = SessionStore::new();
    store.add_to_cart(&custom_product(1, "Desk Lamp", 45, "Lighting"), Quantity::ONE);

    let mut late = store.subscribe();
    // Nothing pending to observe, but the current snapshot is complete.
    assert!(!late.has_changed().unwrap());
    assert_eq!(late.borrow().total_items(), 1);
}

#[test]
fn test_observer_reads_are_consistent_snapshots() {
    let catalog = sample_catalog();
    let store = SessionStore::new();
    let sub = store.subscribe();

    store.add_to_cart(&fixture_product(&catalog, 1), Quantity::new(2).unwrap());
    store.add_to_cart(&fixture_product(&catalog, 2), Quantity::ONE);

    // A single borrow sees totals that agree with the lines it contains.
    let state = sub.borrow();
    let recomputed: u32 = state.cart().iter().map(|line| line.quantity.get()).sum();
    assert_eq!(state.total_items(), recomputed);
}

#[test]
fn test_dropped_subscription_unregisters() {
    let store = SessionStore::new();
    let sub = store.subscribe();
    drop(sub);

    // Mutating with no live observers must not panic.
    store.add_to_cart(&custom_product(1, "Desk Lamp", 45, "Lighting"), Quantity::ONE);
    assert_eq!(store.total_items(), 1);
}

// =============================================================================
// Async Observers
// =============================================================================

#[tokio::test]
async fn test_async_observer_wakes_on_mutation() {
    let catalog = sample_catalog();
    let store = SessionStore::new();
    let mut sub = store.subscribe();

    let badge = tokio::spawn(async move {
        sub.changed().await.unwrap();
        sub.borrow().total_items()
    });

    store.add_to_cart(&fixture_product(&catalog, 4), Quantity::new(3).unwrap());

    assert_eq!(badge.await.unwrap(), 3);
}
