use serde::{Deserialize, Serialize};

use crate::error::ValuationError;
use crate::models::{RatioTargets, TargetAllocation, ZoneAprs};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub targets: RatioTargets,
    pub allocation: TargetAllocation,
    pub aprs: ZoneAprs,
    pub risk: RiskSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskSettings {
    pub liquidation_threshold: f64,
    /// Health factor below which the presentation layer draws its warning
    /// reference line.
    pub health_factor_floor: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            targets: RatioTargets {
                stability_growth: 1.5,
                yield_loan: 2.5,
            },
            allocation: TargetAllocation {
                pool_pct: 40.0,
                range_position_pct: 40.0,
                reserve_pct: 20.0,
            },
            aprs: ZoneAprs {
                pool: 0.25,
                range_position: 0.35,
                reserve: 0.05,
            },
            risk: RiskSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for RiskSettings {
    fn default() -> Self {
        RiskSettings {
            liquidation_threshold: 0.85,
            health_factor_floor: 1.2,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Layered load: built-in defaults, then an optional `config/default`
    /// file, then `VALUATOR__`-prefixed environment variables.
    pub fn new() -> Result<Self, ValuationError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("VALUATOR").separator("__"))
            .build()?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ValuationError> {
        self.allocation.validate()?;
        if self.risk.liquidation_threshold <= 0.0 || self.risk.liquidation_threshold >= 1.0 {
            return Err(ValuationError::InvalidAmount {
                name: "liquidation_threshold",
                value: self.risk.liquidation_threshold,
            });
        }
        Ok(())
    }
}
