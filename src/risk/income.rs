// Linear APR-to-period income conversion. APRs are fractions, not
// percentage integers.

pub fn monthly_income(value_usd: f64, apr: f64) -> f64 {
    value_usd * apr / 12.0
}

pub fn annual_income(value_usd: f64, apr: f64) -> f64 {
    value_usd * apr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_projection() {
        assert!((annual_income(10_000.0, 0.25) - 2_500.0).abs() < 1e-9);
        assert!((monthly_income(12_000.0, 0.12) - 120.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_is_annual_over_twelve() {
        let value = 7_345.0;
        let apr = 0.18;
        assert!((monthly_income(value, apr) - annual_income(value, apr) / 12.0).abs() < 1e-12);
    }
}
