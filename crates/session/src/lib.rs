//! StyleHub Session - shared browsing-session state.
//!
//! This crate owns the two collections every StyleHub page reads: the
//! user's **favorites** and their **cart**. The [`SessionStore`] is the
//! single source of truth - listing cards, the detail page, the cart page,
//! and the navigation badge all consult it and never mutate the
//! collections directly.
//!
//! # Architecture
//!
//! - State lives inside a `tokio::sync::watch` channel. Every mutation is
//!   one `send_modify` closure, so observers see each change as a single
//!   indivisible step - a snapshot is either fully visible or not yet
//!   visible, never partially applied.
//! - Derived values (`total_price`, `total_items`) are recomputed from the
//!   current snapshot on every read. There are no incrementally maintained
//!   counters to drift.
//! - Nothing here performs I/O or awaits. Subscribers that live in async
//!   contexts can await change notification; the store itself never does.
//!
//! # Modules
//!
//! - [`store`] - The [`SessionStore`] and the [`SessionState`] snapshot
//! - [`catalog`] - Read-only wrapper over the externally supplied product list
//! - [`checkout`] - Order summary computed at checkout hand-off

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod store;

pub use catalog::{Catalog, CatalogError};
pub use checkout::{CheckoutConfig, ConfigError, OrderSummary};
pub use store::{SessionState, SessionStore, StoreSubscription};
