// Portfolio valuation service: aggregates position math, leverage metrics
// and balance ratios over one portfolio snapshot.
use chrono::Utc;
use tracing::{debug, info};

use crate::error::ValuationError;
use crate::math::{constant_product, range_position};
use crate::models::{
    IncomeBreakdown, IncomeProjection, LeverageAssessment, PortfolioSnapshot, RatioAssessment,
    RatioTargets, ValuationReport, YieldBreakdown, ZoneAprs, ZoneTotals,
};
use crate::risk;

/// Composition root of the engine. Stateless; every call is a pure mapping
/// from a snapshot to a report.
pub struct PortfolioValuator;

impl PortfolioValuator {
    pub fn new() -> Self {
        Self
    }

    /// Produces the full valuation report for one snapshot.
    pub fn valuate(
        &self,
        snapshot: &PortfolioSnapshot,
        targets: &RatioTargets,
        aprs: &ZoneAprs,
    ) -> Result<ValuationReport, ValuationError> {
        snapshot.validate()?;
        debug!(
            "valuating snapshot at price {}",
            snapshot.current_price
        );

        let pool = snapshot.pool.revalued(snapshot.current_price)?;
        let range_value =
            range_position::value_at(&snapshot.range_position, snapshot.current_price)?;
        let range_liquidity = range_position::liquidity(&snapshot.range_position)?;
        let range_amounts = range_position::amounts_at(
            range_liquidity,
            snapshot.current_price,
            &snapshot.range_position.range,
        )?;

        let yield_breakdown = YieldBreakdown {
            pool_usd: pool.value_usd,
            range_position_usd: range_value,
            reserve_usd: snapshot.reserve_usd,
            range_amounts,
        };

        let zones = ZoneTotals {
            stability_usd: snapshot.stability_usd,
            growth_usd: snapshot.collateral.collateral_value_usd,
            yield_usd: pool.value_usd + range_value + snapshot.reserve_usd,
        };

        let stability_growth = Self::assess_ratio(
            risk::stability_growth_ratio(zones.stability_usd, zones.growth_usd),
            targets.stability_growth,
            risk::classify_sg_deviation,
        );
        let yield_loan = Self::assess_ratio(
            risk::yield_loan_ratio(zones.yield_usd, snapshot.collateral.debt_usd),
            targets.yield_loan,
            risk::classify_yl_deviation,
        );

        let leverage = Self::assess_leverage(snapshot);
        let income = Self::project_income(&yield_breakdown, aprs);

        info!(
            "portfolio valuated: total {:.2} USD, health factor {:.3}",
            zones.total(),
            leverage.health_factor
        );

        Ok(ValuationReport {
            zones,
            yield_breakdown,
            stability_growth,
            yield_loan,
            leverage,
            income,
            computed_at: Utc::now(),
        })
    }

    fn assess_ratio(
        value: f64,
        target: f64,
        classify: fn(f64) -> risk::Severity,
    ) -> RatioAssessment {
        let deviation = risk::deviation_pct(value, target);
        RatioAssessment {
            value,
            target,
            deviation_pct: deviation,
            severity: classify(deviation),
        }
    }

    fn assess_leverage(snapshot: &PortfolioSnapshot) -> LeverageAssessment {
        let collateral = &snapshot.collateral;
        let health_factor = risk::health_factor_guarded(
            collateral.collateral_value_usd,
            collateral.debt_usd,
            collateral.liquidation_threshold,
        );
        let ltv_pct = risk::ltv_guarded(collateral.debt_usd, collateral.collateral_value_usd);
        LeverageAssessment {
            health_factor,
            ltv_pct,
            hf_severity: risk::classify_health_factor(health_factor),
            ltv_severity: risk::classify_ltv(ltv_pct),
        }
    }

    fn project_income(yield_breakdown: &YieldBreakdown, aprs: &ZoneAprs) -> IncomeBreakdown {
        let pool = Self::project_sleeve(yield_breakdown.pool_usd, aprs.pool);
        let range_position =
            Self::project_sleeve(yield_breakdown.range_position_usd, aprs.range_position);
        let reserve = Self::project_sleeve(yield_breakdown.reserve_usd, aprs.reserve);
        let total = IncomeProjection {
            monthly_usd: pool.monthly_usd + range_position.monthly_usd + reserve.monthly_usd,
            annual_usd: pool.annual_usd + range_position.annual_usd + reserve.annual_usd,
        };
        IncomeBreakdown {
            pool,
            range_position,
            reserve,
            total,
        }
    }

    fn project_sleeve(value_usd: f64, apr: f64) -> IncomeProjection {
        IncomeProjection {
            monthly_usd: risk::monthly_income(value_usd, apr),
            annual_usd: risk::annual_income(value_usd, apr),
        }
    }

    /// Values the range position in isolation; convenience for callers that
    /// only track the concentrated-liquidity sleeve.
    pub fn range_position_value(
        &self,
        snapshot: &PortfolioSnapshot,
    ) -> Result<f64, ValuationError> {
        range_position::value_at(&snapshot.range_position, snapshot.current_price)
    }

    /// Marks the constant-product sleeve to the snapshot price.
    pub fn pool_value(&self, snapshot: &PortfolioSnapshot) -> Result<f64, ValuationError> {
        constant_product::revalue(
            snapshot.pool.value_usd,
            snapshot.pool.reference_price,
            snapshot.current_price,
        )
    }
}

impl Default for PortfolioValuator {
    fn default() -> Self {
        Self::new()
    }
}
