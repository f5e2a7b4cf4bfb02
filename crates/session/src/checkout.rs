//! Checkout hand-off summary.
//!
//! The cart page shows an order summary (subtotal, shipping, tax, total)
//! before handing the session off to checkout. The computation is pure:
//! snapshot in, summary out. Pricing beyond the flat display tax is out of
//! scope - there are no promotions, no tax jurisdictions, no shipping
//! tiers.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STYLEHUB_TAX_RATE` - Flat display tax rate as a decimal fraction
//!   (default: 0.08)

use rust_decimal::Decimal;
use stylehub_core::Price;

use crate::store::SessionState;

/// Environment variable overriding the flat display tax rate.
const TAX_RATE_ENV: &str = "STYLEHUB_TAX_RATE";

/// Configuration errors that can occur during loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable is present but unusable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Checkout display configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Flat display tax rate as a fraction of the subtotal.
    pub tax_rate: Decimal,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            // 8% flat display tax
            tax_rate: Decimal::new(8, 2),
        }
    }
}

impl CheckoutConfig {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `STYLEHUB_TAX_RATE` is set but is not a decimal
    /// in `[0, 1)`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(TAX_RATE_ENV) {
            let rate: Decimal = raw.trim().parse().map_err(|_| {
                ConfigError::InvalidEnvVar(
                    TAX_RATE_ENV.to_owned(),
                    format!("not a decimal number: {raw}"),
                )
            })?;
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(ConfigError::InvalidEnvVar(
                    TAX_RATE_ENV.to_owned(),
                    format!("rate must be in [0, 1), got {rate}"),
                ));
            }
            config.tax_rate = rate;
        }

        Ok(config)
    }
}

/// The order summary shown at checkout hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    /// Total number of units across all lines.
    pub item_count: u32,
    /// Sum of line totals.
    pub subtotal: Price,
    /// Shipping cost; StyleHub ships free, so always zero.
    pub shipping: Price,
    /// Flat display tax on the subtotal, rounded to cents.
    pub tax: Price,
    /// Subtotal plus tax.
    pub total: Price,
}

impl OrderSummary {
    /// Compute the summary for the cart in a session snapshot.
    #[must_use]
    pub fn for_cart(state: &SessionState, config: &CheckoutConfig) -> Self {
        let subtotal = state.total_price();
        let tax = Price::new((subtotal.amount() * config.tax_rate).round_dp(2));
        Self {
            item_count: state.total_items(),
            subtotal,
            shipping: Price::ZERO,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use stylehub_core::{Product, ProductId, Quantity};

    use super::*;
    use crate::store::SessionStore;

    fn product(id: i32, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Price::from_major(price),
            image: format!("https://img.example.com/{id}.jpg"),
            category: "Electronics".to_owned(),
        }
    }

    #[test]
    fn test_summary_arithmetic() {
        let store = SessionStore::new();
        store.add_to_cart(&product(1, 299), Quantity::new(2).unwrap());
        store.add_to_cart(&product(2, 89), Quantity::ONE);

        let summary = OrderSummary::for_cart(&store.snapshot(), &CheckoutConfig::default());
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.subtotal, Price::from_major(687));
        assert_eq!(summary.shipping, Price::ZERO);
        assert_eq!(summary.tax.to_string(), "$54.96");
        assert_eq!(summary.total.to_string(), "$741.96");
    }

    #[test]
    fn test_summary_empty_cart() {
        let store = SessionStore::new();
        let summary = OrderSummary::for_cart(&store.snapshot(), &CheckoutConfig::default());
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.subtotal, Price::ZERO);
        assert_eq!(summary.tax, Price::ZERO);
        assert_eq!(summary.total, Price::ZERO);
    }

    #[test]
    fn test_tax_rounds_to_cents() {
        let store = SessionStore::new();
        // $129.95 * 0.08 = $10.396 -> $10.40
        store.add_to_cart(
            &Product {
                id: ProductId::new(1),
                name: "Desk Mat".to_owned(),
                price: Price::new(Decimal::new(12_995, 2)),
                image: "https://img.example.com/mat.jpg".to_owned(),
                category: "Accessories".to_owned(),
            },
            Quantity::ONE,
        );

        let summary = OrderSummary::for_cart(&store.snapshot(), &CheckoutConfig::default());
        assert_eq!(summary.tax.to_string(), "$10.40");
        assert_eq!(summary.total.to_string(), "$140.35");
    }

    #[test]
    fn test_default_rate_is_eight_percent() {
        assert_eq!(CheckoutConfig::default().tax_rate, Decimal::new(8, 2));
    }
}
