//! Money and quantity handling
//!
//! All prices, quantities and totals are `rust_decimal::Decimal` internally.
//! On the wire they are plain JSON numbers: integral values without a
//! fractional part (`2`), everything else as the nearest `f64` (`39.98`).
//!
//! ## Usage
//! ```rust
//! use order_service::money::{round_currency, parse_quantity};
//! use rust_decimal::Decimal;
//!
//! let qty = parse_quantity(&serde_json::json!("2")).unwrap();
//! let total = round_currency(Decimal::new(1999, 2) * qty);
//! assert_eq!(total, Decimal::new(3998, 2));
//! ```

use rust_decimal::RoundingStrategy;
use rust_decimal::prelude::*;
use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Currency amounts are kept to cents.
pub const CURRENCY_SCALE: u32 = 2;

/// Round to two decimals, half away from zero.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Why a quantity was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Not a number, not finite, or not > 0
    #[error("quantity must be > 0")]
    Invalid,
    /// Finite and positive, but not representable as a non-zero `Decimal`
    #[error("quantity is out of range")]
    OutOfRange,
}

/// Parse a client-supplied quantity.
///
/// Accepts a JSON number or a numeric string (surrounding whitespace allowed).
/// Hex, booleans and other non-decimal forms are `Invalid`. A finite positive
/// value that `Decimal` cannot hold (above ~7.9e28, or so small it would
/// become zero) is `OutOfRange`.
pub fn parse_quantity(raw: &Value) -> Result<Decimal, QuantityError> {
    let text = match raw {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return Err(QuantityError::Invalid),
    };
    if text.is_empty() {
        return Err(QuantityError::Invalid);
    }

    // f64 first: rejects garbage and catches inf / NaN spellings
    let as_float: f64 = text.parse().map_err(|_| QuantityError::Invalid)?;
    if !as_float.is_finite() || as_float <= 0.0 {
        return Err(QuantityError::Invalid);
    }

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
        .or_else(|| Decimal::from_f64(as_float))
        .filter(|d| d.is_sign_positive() && !d.is_zero())
        .ok_or(QuantityError::OutOfRange)
}

// ============================================================================
// Amount: JSON-number output type
// ============================================================================

/// Decimal value that serializes as a JSON number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(Decimal);

impl Amount {
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let d = self.0.normalize();
        if d.scale() == 0 {
            if let Some(i) = d.to_i64() {
                return serializer.serialize_i64(i);
            }
        }
        match d.to_f64() {
            Some(f) => serializer.serialize_f64(f),
            None => serializer.serialize_str(&d.to_string()),
        }
    }
}
