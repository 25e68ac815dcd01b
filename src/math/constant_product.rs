// Balanced constant-product pool: value scales with the square root of the
// price ratio as the pool rebalances against the move.
use crate::error::ValuationError;
use crate::models::{ensure_amount, ensure_price};

/// Revalues a balanced two-asset constant-product position after a
/// base-asset price move: `new_value = prev_value * sqrt(new_price / prev_price)`.
///
/// The square-root dampening is the impermanent-loss-adjusted response of
/// the pool; value grows with price but sub-linearly.
pub fn revalue(prev_value: f64, prev_price: f64, new_price: f64) -> Result<f64, ValuationError> {
    ensure_amount("prev_value", prev_value)?;
    ensure_price("prev_price", prev_price)?;
    ensure_price("new_price", new_price)?;

    let ratio = (new_price / prev_price).sqrt();
    Ok(prev_value * ratio)
}
