// Aggregated valuation report consumed by the presentation layer
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TokenAmounts;
use crate::risk::Severity;

/// USD value held in each portfolio zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneTotals {
    pub stability_usd: f64,
    pub growth_usd: f64,
    pub yield_usd: f64,
}

impl ZoneTotals {
    pub fn total(&self) -> f64 {
        self.stability_usd + self.growth_usd + self.yield_usd
    }
}

/// Per-sleeve composition of the yield zone at the observed price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldBreakdown {
    pub pool_usd: f64,
    pub range_position_usd: f64,
    pub reserve_usd: f64,
    /// Token split of the range position at the observed price.
    pub range_amounts: TokenAmounts,
}

/// A balance ratio together with its distance from target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioAssessment {
    pub value: f64,
    pub target: f64,
    pub deviation_pct: f64,
    pub severity: Severity,
}

/// Health factor and loan-to-value of the collateral zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeverageAssessment {
    pub health_factor: f64,
    pub ltv_pct: f64,
    pub hf_severity: Severity,
    pub ltv_severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeProjection {
    pub monthly_usd: f64,
    pub annual_usd: f64,
}

/// Projected income per yield sleeve plus the zone total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    pub pool: IncomeProjection,
    pub range_position: IncomeProjection,
    pub reserve: IncomeProjection,
    pub total: IncomeProjection,
}

/// The single report produced per portfolio snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub zones: ZoneTotals,
    pub yield_breakdown: YieldBreakdown,
    pub stability_growth: RatioAssessment,
    pub yield_loan: RatioAssessment,
    pub leverage: LeverageAssessment,
    pub income: IncomeBreakdown,
    pub computed_at: DateTime<Utc>,
}
