//! StyleHub Core - Shared types library.
//!
//! This crate provides common types used across all StyleHub components:
//! - `session` - Shared browsing-session state (favorites and cart)
//! - `integration-tests` - Cross-crate flow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no channels, no view glue.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and quantities,
//!   plus the catalog product record and cart line item

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
