// Concentrated-liquidity pricing: constant liquidity inside a price band,
// pure base asset below it, pure quote asset above it.
use crate::error::ValuationError;
use crate::models::{ensure_amount, ensure_price, PriceRange, RangePosition, TokenAmounts};

/// Liquidity constant of a position, fixed for its lifetime.
///
/// Recovered from the opening value: `V0 = L * (2*sqrt(P0) - P0/sqrt(Pb) - sqrt(Pa))`.
/// Fails when the entry price and band produce a non-positive denominator.
pub fn liquidity(position: &RangePosition) -> Result<f64, ValuationError> {
    position.validate()?;

    let sqrt_entry = position.entry_price.sqrt();
    let sqrt_lower = position.range.lower_price.sqrt();
    let sqrt_upper = position.range.upper_price.sqrt();

    let denominator = 2.0 * sqrt_entry - position.entry_price / sqrt_upper - sqrt_lower;
    if !denominator.is_finite() || denominator <= 0.0 {
        return Err(ValuationError::DegenerateLiquidity { denominator });
    }

    Ok(position.initial_value_usd / denominator)
}

/// Current USD value of a position under the three-regime range model.
///
/// At or below the lower bound the deposit is treated as fully converted to
/// the base asset at the geometric mean of entry and lower price; at or
/// above the upper bound it is reported at its opening value. Both
/// out-of-range legs assume a stable-valued quote asset and do not meet the
/// in-range branch exactly at the boundaries.
pub fn value_at(position: &RangePosition, current_price: f64) -> Result<f64, ValuationError> {
    ensure_price("current_price", current_price)?;
    position.validate()?;

    let range = &position.range;

    if current_price <= range.lower_price {
        // Fully converted to the base asset
        let base_amount =
            position.initial_value_usd / (position.entry_price * range.lower_price).sqrt();
        return Ok(base_amount * current_price);
    }

    if current_price >= range.upper_price {
        // Fully in the quote asset
        return Ok(position.initial_value_usd);
    }

    let l = liquidity(position)?;
    let sqrt_price = current_price.sqrt();
    let sqrt_lower = range.lower_price.sqrt();
    let sqrt_upper = range.upper_price.sqrt();

    let base = l * (1.0 / sqrt_price - 1.0 / sqrt_upper);
    let quote = l * (sqrt_price - sqrt_lower);

    Ok(base * current_price + quote)
}

/// Token split held by liquidity `l` at the given price.
///
/// Consistent with [`value_at`] (`base * price + quote`) inside the band;
/// out of range each function follows its own simplification.
pub fn amounts_at(
    l: f64,
    current_price: f64,
    range: &PriceRange,
) -> Result<TokenAmounts, ValuationError> {
    ensure_price("current_price", current_price)?;
    ensure_amount("liquidity", l)?;
    range.validate()?;

    let sqrt_lower = range.lower_price.sqrt();
    let sqrt_upper = range.upper_price.sqrt();

    if current_price <= range.lower_price {
        return Ok(TokenAmounts {
            base: l * (1.0 / sqrt_lower - 1.0 / sqrt_upper),
            quote: 0.0,
        });
    }

    if current_price >= range.upper_price {
        return Ok(TokenAmounts {
            base: 0.0,
            quote: l * (sqrt_upper - sqrt_lower),
        });
    }

    let sqrt_price = current_price.sqrt();
    Ok(TokenAmounts {
        base: l * (1.0 / sqrt_price - 1.0 / sqrt_upper),
        quote: l * (sqrt_price - sqrt_lower),
    })
}

/// Full-exit conversion of a quote-denominated amount into the base asset,
/// using the geometric mean of entry and exit price as the effective
/// execution price.
///
/// This is an approximation: the true execution price depends on the price
/// path and the pool depth, neither of which the engine models.
pub fn exit_to_base_asset(
    quote_amount: f64,
    entry_price: f64,
    exit_price: f64,
) -> Result<f64, ValuationError> {
    ensure_amount("quote_amount", quote_amount)?;
    ensure_price("entry_price", entry_price)?;
    ensure_price("exit_price", exit_price)?;

    let average_price = (entry_price * exit_price).sqrt();
    Ok(quote_amount / average_price)
}
