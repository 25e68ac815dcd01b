// Cross-zone balance ratios and their deviation from target
use crate::risk::Severity;

/// Stability-zone value relative to the Growth/Collateral zone.
///
/// The denominator is the growth value alone; the combined total only
/// guards the all-zero portfolio, so a portfolio with stability but no
/// growth yields an infinite ratio.
pub fn stability_growth_ratio(stability_usd: f64, growth_usd: f64) -> f64 {
    let total = stability_usd + growth_usd;
    if total > 0.0 {
        stability_usd / growth_usd
    } else {
        0.0
    }
}

/// Yield-zone value relative to the outstanding debt; `0` when there is no
/// debt.
pub fn yield_loan_ratio(yield_usd: f64, debt_usd: f64) -> f64 {
    if debt_usd > 0.0 {
        yield_usd / debt_usd
    } else {
        0.0
    }
}

/// Absolute deviation from target, in percent of the target; `0` when no
/// target is set.
pub fn deviation_pct(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        (current - target).abs() / target * 100.0
    } else {
        0.0
    }
}

/// Deviation thresholds for the stability/growth ratio.
pub fn classify_sg_deviation(deviation: f64) -> Severity {
    if deviation > 20.0 {
        Severity::Danger
    } else if deviation > 10.0 {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

/// Deviation thresholds for the yield/loan ratio. Wider than the
/// stability/growth table; the two are never shared.
pub fn classify_yl_deviation(deviation: f64) -> Severity {
    if deviation > 50.0 {
        Severity::Danger
    } else if deviation > 20.0 {
        Severity::Warning
    } else {
        Severity::Normal
    }
}
