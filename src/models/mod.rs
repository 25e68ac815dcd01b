pub mod portfolio;
pub mod position;
pub mod report;

pub use portfolio::*;
pub use position::*;
pub use report::*;

use crate::error::ValuationError;

pub(crate) fn ensure_price(name: &'static str, value: f64) -> Result<(), ValuationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValuationError::InvalidPrice { name, value });
    }
    Ok(())
}

pub(crate) fn ensure_amount(name: &'static str, value: f64) -> Result<(), ValuationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValuationError::InvalidAmount { name, value });
    }
    Ok(())
}
