use serde::{Deserialize, Serialize};

use crate::error::ValuationError;
use crate::models::{ensure_amount, ensure_price, ConstantProductPosition, RangePosition};

/// Collateral lent against an outstanding loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollateralDebtPair {
    pub collateral_value_usd: f64,
    pub debt_usd: f64,
    pub liquidation_threshold: f64,
}

impl CollateralDebtPair {
    pub fn new(
        collateral_value_usd: f64,
        debt_usd: f64,
        liquidation_threshold: f64,
    ) -> Result<Self, ValuationError> {
        let pair = Self {
            collateral_value_usd,
            debt_usd,
            liquidation_threshold,
        };
        pair.validate()?;
        Ok(pair)
    }

    pub fn validate(&self) -> Result<(), ValuationError> {
        ensure_amount("collateral_value_usd", self.collateral_value_usd)?;
        ensure_amount("debt_usd", self.debt_usd)?;
        if !self.liquidation_threshold.is_finite()
            || self.liquidation_threshold <= 0.0
            || self.liquidation_threshold >= 1.0
        {
            return Err(ValuationError::InvalidAmount {
                name: "liquidation_threshold",
                value: self.liquidation_threshold,
            });
        }
        Ok(())
    }
}

/// One observation of the whole portfolio, supplied by the caller. The
/// engine never stores snapshots; it only maps them to reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    /// Stability-zone stable reserve.
    pub stability_usd: f64,
    /// Growth zone: the borrowed-against collateral.
    pub collateral: CollateralDebtPair,
    /// Yield zone: constant-product pool position.
    pub pool: ConstantProductPosition,
    /// Yield zone: concentrated-liquidity position.
    pub range_position: RangePosition,
    /// Yield zone: uncommitted cash reserve.
    pub reserve_usd: f64,
    /// Market price of the base asset at observation time.
    pub current_price: f64,
}

impl PortfolioSnapshot {
    pub fn validate(&self) -> Result<(), ValuationError> {
        ensure_amount("stability_usd", self.stability_usd)?;
        ensure_amount("reserve_usd", self.reserve_usd)?;
        ensure_price("current_price", self.current_price)?;
        self.collateral.validate()?;
        self.pool.validate()?;
        self.range_position.validate()
    }
}

/// How the yield zone should be split between its three sleeves, in
/// percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetAllocation {
    pub pool_pct: f64,
    pub range_position_pct: f64,
    pub reserve_pct: f64,
}

impl TargetAllocation {
    pub fn total(&self) -> f64 {
        self.pool_pct + self.range_position_pct + self.reserve_pct
    }

    /// The three sleeves must account for the whole zone.
    pub fn validate(&self) -> Result<(), ValuationError> {
        ensure_amount("pool_pct", self.pool_pct)?;
        ensure_amount("range_position_pct", self.range_position_pct)?;
        ensure_amount("reserve_pct", self.reserve_pct)?;
        let total = self.total();
        if (total - 100.0).abs() > 1e-9 {
            return Err(ValuationError::ValidationError {
                reason: format!("yield allocation must sum to 100%, got {}", total),
            });
        }
        Ok(())
    }
}

/// Target values for the cross-zone balance ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioTargets {
    pub stability_growth: f64,
    pub yield_loan: f64,
}

/// APR of each yield sleeve, as fractions (0.25 = 25%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneAprs {
    pub pool: f64,
    pub range_position: f64,
    pub reserve: f64,
}
