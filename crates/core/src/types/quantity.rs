//! Cart line quantity type.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero; cart lines start at one unit.
    #[error("quantity must be at least 1")]
    Zero,
    /// The input could not be parsed as a positive whole number.
    #[error("quantity must be a positive whole number")]
    NotANumber,
}

/// A cart line quantity.
///
/// Quantities are at least 1 by construction - a line that would drop to
/// zero is removed from the cart instead of stored. Zero and negative
/// values are rejected where user input enters the typed domain, so store
/// operations taking a `Quantity` cannot fail on malformed input.
///
/// ## Examples
///
/// ```
/// use stylehub_core::Quantity;
///
/// let two = Quantity::new(2).unwrap();
/// assert_eq!(two.get(), 2);
/// assert!(Quantity::new(0).is_err());
///
/// // Parsing from user input (e.g. a quantity stepper field):
/// let parsed: Quantity = "3".parse().unwrap();
/// assert_eq!(parsed.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A single unit, the default for "add to cart" controls.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a `Quantity` from an integer.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Zero`] if the value is zero.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        match NonZeroU32::new(value) {
            Some(n) => Ok(Self(n)),
            None => Err(QuantityError::Zero),
        }
    }

    /// Get the quantity as a plain integer.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0.get()
    }

    /// Add another quantity, saturating at `u32::MAX` instead of wrapping.
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.get()))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Quantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s.trim().parse().map_err(|_| QuantityError::NotANumber)?;
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
