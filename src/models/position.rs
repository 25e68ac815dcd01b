use serde::{Deserialize, Serialize};

use crate::error::ValuationError;
use crate::models::{ensure_amount, ensure_price};

/// Price band of a concentrated-liquidity position. Immutable once the
/// position is opened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lower_price: f64,
    pub upper_price: f64,
}

impl PriceRange {
    pub fn new(lower_price: f64, upper_price: f64) -> Result<Self, ValuationError> {
        let range = Self {
            lower_price,
            upper_price,
        };
        range.validate()?;
        Ok(range)
    }

    /// Re-checks the invariants; call this on values that arrived through
    /// deserialization instead of `new`.
    pub fn validate(&self) -> Result<(), ValuationError> {
        ensure_price("lower_price", self.lower_price)?;
        ensure_price("upper_price", self.upper_price)?;
        if self.lower_price >= self.upper_price {
            return Err(ValuationError::InvalidRange {
                lower: self.lower_price,
                upper: self.upper_price,
            });
        }
        Ok(())
    }

    /// True when the price sits strictly inside the band.
    pub fn contains(&self, price: f64) -> bool {
        price > self.lower_price && price < self.upper_price
    }
}

/// A concentrated-liquidity deposit opened at `entry_price`, denominated as
/// a USD value split implicitly between the base and quote asset by the
/// range formula. Superseded, not mutated, when closed and reopened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangePosition {
    pub initial_value_usd: f64,
    pub entry_price: f64,
    pub range: PriceRange,
}

impl RangePosition {
    pub fn new(
        initial_value_usd: f64,
        entry_price: f64,
        range: PriceRange,
    ) -> Result<Self, ValuationError> {
        let position = Self {
            initial_value_usd,
            entry_price,
            range,
        };
        position.validate()?;
        Ok(position)
    }

    pub fn validate(&self) -> Result<(), ValuationError> {
        ensure_amount("initial_value_usd", self.initial_value_usd)?;
        ensure_price("entry_price", self.entry_price)?;
        self.range.validate()
    }
}

/// Raw token split of a range position at some price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TokenAmounts {
    pub base: f64,
    pub quote: f64,
}

impl TokenAmounts {
    /// Quote-denominated value of the split at the given price.
    pub fn value_at(&self, price: f64) -> f64 {
        self.base * price + self.quote
    }
}

/// Balanced two-asset constant-product pool position. `value_usd` and
/// `reference_price` always belong to the same observation and are only
/// ever replaced together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantProductPosition {
    pub value_usd: f64,
    pub reference_price: f64,
}

impl ConstantProductPosition {
    pub fn new(value_usd: f64, reference_price: f64) -> Result<Self, ValuationError> {
        let position = Self {
            value_usd,
            reference_price,
        };
        position.validate()?;
        Ok(position)
    }

    pub fn validate(&self) -> Result<(), ValuationError> {
        ensure_amount("value_usd", self.value_usd)?;
        ensure_price("reference_price", self.reference_price)
    }

    /// Returns the position marked to `new_price`, with value and reference
    /// price replaced as a pair.
    pub fn revalued(&self, new_price: f64) -> Result<Self, ValuationError> {
        let value_usd =
            crate::math::constant_product::revalue(self.value_usd, self.reference_price, new_price)?;
        Ok(Self {
            value_usd,
            reference_price: new_price,
        })
    }
}
