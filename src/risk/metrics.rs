// Health factor and loan-to-value of the collateral zone
use serde::{Deserialize, Serialize};

/// Classification of a metric against its threshold table. `Normal` covers
/// both "safe" leverage readings and on-target ratios; the presentation
/// layer maps variants to styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Normal,
    Warning,
    Danger,
}

/// Collateral buffer relative to debt.
///
/// Precondition: `debt_usd > 0`. Callers with zero debt must treat the
/// position as carrying no leverage risk instead of calling this; see
/// [`health_factor_guarded`].
pub fn health_factor(collateral_value_usd: f64, debt_usd: f64, liquidation_threshold: f64) -> f64 {
    (collateral_value_usd * liquidation_threshold) / debt_usd
}

/// Debt as a percentage of collateral value.
///
/// Precondition: `collateral_value_usd > 0`; see [`ltv_guarded`].
pub fn ltv(debt_usd: f64, collateral_value_usd: f64) -> f64 {
    (debt_usd / collateral_value_usd) * 100.0
}

/// [`health_factor`] with the zero-debt case mapped to `+inf` (no leverage,
/// no liquidation risk).
pub fn health_factor_guarded(
    collateral_value_usd: f64,
    debt_usd: f64,
    liquidation_threshold: f64,
) -> f64 {
    if debt_usd > 0.0 {
        health_factor(collateral_value_usd, debt_usd, liquidation_threshold)
    } else {
        f64::INFINITY
    }
}

/// [`ltv`] with the zero-collateral case mapped to `0`.
pub fn ltv_guarded(debt_usd: f64, collateral_value_usd: f64) -> f64 {
    if collateral_value_usd > 0.0 {
        ltv(debt_usd, collateral_value_usd)
    } else {
        0.0
    }
}

/// Health factor thresholds: above 1.5 is healthy, 1.2 and below is in the
/// liquidation danger band.
pub fn classify_health_factor(hf: f64) -> Severity {
    if hf > 1.5 {
        Severity::Normal
    } else if hf > 1.2 {
        Severity::Warning
    } else {
        Severity::Danger
    }
}

/// LTV thresholds: above 75% is the danger band, above 65% warrants
/// attention.
pub fn classify_ltv(ltv_pct: f64) -> Severity {
    if ltv_pct > 75.0 {
        Severity::Danger
    } else if ltv_pct > 65.0 {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_factor_formula() {
        let hf = health_factor(10_000.0, 5_000.0, 0.8);
        assert!((hf - 1.6).abs() < 1e-12);
        assert_eq!(classify_health_factor(hf), Severity::Normal);
    }

    #[test]
    fn test_health_factor_guarded_zero_debt() {
        let hf = health_factor_guarded(10_000.0, 0.0, 0.8);
        assert!(hf.is_infinite());
        assert_eq!(classify_health_factor(hf), Severity::Normal);
    }

    #[test]
    fn test_ltv_formula() {
        assert!((ltv(5_000.0, 10_000.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_ltv_guarded_zero_collateral() {
        assert_eq!(ltv_guarded(5_000.0, 0.0), 0.0);
    }

    #[test]
    fn test_classify_health_factor_boundaries_are_strict() {
        assert_eq!(classify_health_factor(1.5001), Severity::Normal);
        assert_eq!(classify_health_factor(1.5), Severity::Warning);
        assert_eq!(classify_health_factor(1.2), Severity::Danger);
        assert_eq!(classify_health_factor(0.9), Severity::Danger);
    }

    #[test]
    fn test_classify_ltv_boundaries() {
        assert_eq!(classify_ltv(75.01), Severity::Danger);
        assert_eq!(classify_ltv(75.0), Severity::Warning);
        assert_eq!(classify_ltv(65.0), Severity::Normal);
        assert_eq!(classify_ltv(50.0), Severity::Normal);
    }
}
