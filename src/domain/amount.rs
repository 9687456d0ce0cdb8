//! Amount type
//!
//! Domain primitive for monetary amounts. Construction validates positivity,
//! so a non-positive amount cannot reach the store.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated, currency-agnostic monetary value, always greater than zero.
///
/// No rounding or precision normalization happens here or anywhere
/// downstream; the value is stored and summed exactly as given.
///
/// # Example
/// ```
/// use rust_decimal::Decimal;
/// use finflow::domain::Amount;
///
/// let amount = Amount::new(Decimal::new(1050, 2)).unwrap();
/// assert_eq!(amount.value(), Decimal::new(1050, 2));
/// assert!(Amount::new(Decimal::ZERO).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

/// Rejection reason for an invalid amount
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("Amount must be positive (got {0})")]
    NotPositive(Decimal),
}

impl Amount {
    /// Validate and wrap a decimal value.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value <= Decimal::ZERO {
            return Err(AmountError::NotPositive(value));
        }

        Ok(Self(value))
    }

    /// The underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
