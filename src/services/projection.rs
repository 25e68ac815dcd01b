// Series preparation for the rendering collaborator, which consumes
// (labels, values) pairs and an optional flat reference line.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValuationError;
use crate::models::{PortfolioSnapshot, RatioTargets, ZoneAprs};
use crate::risk;
use crate::services::PortfolioValuator;
use crate::utils::format::format_usd;

/// One drawable time/price series. The engine fills the data; drawing is
/// the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Flat reference line, e.g. a health-factor floor.
    pub reference: Option<f64>,
}

impl ChartSeries {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: f64) -> Self {
        self.reference = Some(reference);
        self
    }
}

/// Total portfolio value over a sweep of candidate prices. Each point is an
/// independent valuation of the snapshot marked to that price.
pub fn value_series(
    valuator: &PortfolioValuator,
    snapshot: &PortfolioSnapshot,
    targets: &RatioTargets,
    aprs: &ZoneAprs,
    prices: &[f64],
) -> Result<ChartSeries, ValuationError> {
    debug!("building value series over {} price points", prices.len());

    let mut labels = Vec::with_capacity(prices.len());
    let mut values = Vec::with_capacity(prices.len());

    for &price in prices {
        let mut point = snapshot.clone();
        point.current_price = price;
        let report = valuator.valuate(&point, targets, aprs)?;
        labels.push(format_usd(price));
        values.push(report.zones.total());
    }

    Ok(ChartSeries::new(labels, values))
}

/// Health factor over a sweep of candidate prices, with the collateral
/// marked linearly to each price. The optional floor becomes the series
/// reference line.
pub fn health_factor_series(
    snapshot: &PortfolioSnapshot,
    prices: &[f64],
    floor: Option<f64>,
) -> Result<ChartSeries, ValuationError> {
    snapshot.validate()?;
    debug!(
        "building health factor series over {} price points",
        prices.len()
    );

    let collateral = &snapshot.collateral;
    let mut labels = Vec::with_capacity(prices.len());
    let mut values = Vec::with_capacity(prices.len());

    for &price in prices {
        crate::models::ensure_price("price", price)?;
        let scaled_collateral =
            collateral.collateral_value_usd * price / snapshot.current_price;
        let hf = risk::health_factor_guarded(
            scaled_collateral,
            collateral.debt_usd,
            collateral.liquidation_threshold,
        );
        labels.push(format_usd(price));
        values.push(hf);
    }

    let series = ChartSeries::new(labels, values);
    Ok(match floor {
        Some(floor) => series.with_reference(floor),
        None => series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CollateralDebtPair, ConstantProductPosition, PriceRange, RangePosition,
    };

    fn sample_snapshot() -> PortfolioSnapshot {
        PortfolioSnapshot {
            stability_usd: 30_000.0,
            collateral: CollateralDebtPair::new(20_000.0, 8_000.0, 0.85).unwrap(),
            pool: ConstantProductPosition::new(6_000.0, 60_000.0).unwrap(),
            range_position: RangePosition::new(
                10_000.0,
                60_000.0,
                PriceRange::new(50_000.0, 70_000.0).unwrap(),
            )
            .unwrap(),
            reserve_usd: 4_000.0,
            current_price: 60_000.0,
        }
    }

    #[test]
    fn test_value_series_shape() {
        let valuator = PortfolioValuator::new();
        let targets = RatioTargets {
            stability_growth: 1.5,
            yield_loan: 2.5,
        };
        let aprs = ZoneAprs {
            pool: 0.25,
            range_position: 0.35,
            reserve: 0.05,
        };
        let prices = [50_000.0, 55_000.0, 60_000.0, 65_000.0];

        let series =
            value_series(&valuator, &sample_snapshot(), &targets, &aprs, &prices).unwrap();
        assert_eq!(series.labels.len(), 4);
        assert_eq!(series.values.len(), 4);
        assert_eq!(series.reference, None);
        assert_eq!(series.labels[2], "$60,000");

        // Portfolio value should grow with the base asset price.
        assert!(series.values.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_health_factor_series_scales_with_price() {
        let snapshot = sample_snapshot();
        let prices = [30_000.0, 60_000.0, 90_000.0];

        let series = health_factor_series(&snapshot, &prices, Some(1.2)).unwrap();
        assert_eq!(series.reference, Some(1.2));

        // HF at the snapshot price equals the unscaled figure.
        let expected = 20_000.0 * 0.85 / 8_000.0;
        assert!((series.values[1] - expected).abs() < 1e-9);
        // Halving the price halves the collateral and the HF.
        assert!((series.values[0] - expected / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_health_factor_series_rejects_bad_price() {
        let snapshot = sample_snapshot();
        assert!(health_factor_series(&snapshot, &[0.0], None).is_err());
    }
}
