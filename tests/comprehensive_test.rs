// End-to-end walk of the valuation engine over one realistic portfolio.
use defi_portfolio_valuator::{
    config::Settings,
    math::range_position,
    models::{
        CollateralDebtPair, ConstantProductPosition, PortfolioSnapshot, PriceRange, RangePosition,
        RatioTargets, ValuationReport, ZoneAprs,
    },
    risk::{classify_health_factor, health_factor, Severity},
    services::{health_factor_series, value_series, PortfolioValuator},
};

fn snapshot_at(current_price: f64) -> PortfolioSnapshot {
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
        current_price,
    }
}

#[test]
fn test_comprehensive_portfolio_valuation() {
    println!("Running comprehensive valuation scenario");

    let settings = Settings::new().expect("failed to load settings");
    println!("✓ Settings loaded (allocation total {}%)", settings.allocation.total());

    test_range_position_at_entry();
    test_range_position_below_range();
    test_leverage_classification();
    test_full_report(&settings);
    test_chart_series(&settings);

    println!("✓ All comprehensive scenarios passed");
}

fn test_range_position_at_entry() {
    // A 10k position opened at 60k inside [50k, 70k] is still worth 10k at
    // the entry price.
    let snapshot = snapshot_at(60_000.0);
    let value = range_position::value_at(&snapshot.range_position, 60_000.0).unwrap();
    assert!(
        (value - 10_000.0).abs() < 1e-6,
        "expected opening value at entry price, got {}",
        value
    );
    println!("✓ Range position values at opening value on the entry price");
}

fn test_range_position_below_range() {
    let snapshot = snapshot_at(40_000.0);
    let value = range_position::value_at(&snapshot.range_position, 40_000.0).unwrap();

    let base_amount = 10_000.0 / (60_000.0f64 * 50_000.0).sqrt();
    assert!((value - base_amount * 40_000.0).abs() < 1e-9);
    println!("✓ Below the band the position is a pure base-asset holding");
}

fn test_leverage_classification() {
    let hf = health_factor(10_000.0, 5_000.0, 0.8);
    assert!((hf - 1.6).abs() < 1e-12);
    assert_eq!(classify_health_factor(hf), Severity::Normal);
    println!("✓ Health factor 1.6 classifies as healthy");
}

fn test_full_report(settings: &Settings) {
    let valuator = PortfolioValuator::new();
    let report = valuator
        .valuate(&snapshot_at(60_000.0), &settings.targets, &settings.aprs)
        .unwrap();

    assert!((report.zones.stability_usd - 30_000.0).abs() < 1e-12);
    assert!((report.zones.growth_usd - 20_000.0).abs() < 1e-12);
    assert!((report.zones.yield_usd - 20_000.0).abs() < 1e-6);
    assert!((report.zones.total() - 70_000.0).abs() < 1e-6);

    // HF = 20000 * 0.85 / 8000
    assert!((report.leverage.health_factor - 2.125).abs() < 1e-9);
    assert_eq!(report.leverage.hf_severity, Severity::Normal);
    assert!((report.leverage.ltv_pct - 40.0).abs() < 1e-9);

    // The report must survive a serialization round trip unchanged apart
    // from float printing.
    let json = serde_json::to_string(&report).unwrap();
    let parsed: ValuationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.leverage.hf_severity, report.leverage.hf_severity);
    assert!((parsed.zones.total() - report.zones.total()).abs() < 1e-9);

    println!("✓ Full report assembled and serialized");
}

fn test_chart_series(settings: &Settings) {
    let valuator = PortfolioValuator::new();
    let snapshot = snapshot_at(60_000.0);
    let prices = [50_000.0, 55_000.0, 60_000.0, 65_000.0, 70_000.0];

    let values = value_series(
        &valuator,
        &snapshot,
        &settings.targets,
        &settings.aprs,
        &prices,
    )
    .unwrap();
    assert_eq!(values.labels.len(), prices.len());
    assert!(values.reference.is_none());

    let hf = health_factor_series(&snapshot, &prices, Some(settings.risk.health_factor_floor))
        .unwrap();
    assert_eq!(hf.reference, Some(settings.risk.health_factor_floor));
    // Collateral marks up with price, so the HF series is increasing.
    assert!(hf.values.windows(2).all(|pair| pair[0] < pair[1]));

    println!("✓ Chart series prepared for the rendering layer");
}

#[test]
fn test_zero_debt_portfolio_has_no_leverage_risk() {
    let mut snapshot = snapshot_at(60_000.0);
    snapshot.collateral = CollateralDebtPair::new(20_000.0, 0.0, 0.85).unwrap();

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

    let report = valuator.valuate(&snapshot, &targets, &aprs).unwrap();
    assert!(report.leverage.health_factor.is_infinite());
    assert_eq!(report.leverage.hf_severity, Severity::Normal);
    assert_eq!(report.yield_loan.value, 0.0);
}
