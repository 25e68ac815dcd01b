// Valuation error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValuationError {
    #[error("Invalid price for {name}: {value} (must be positive and finite)")]
    InvalidPrice { name: &'static str, value: f64 },

    #[error("Invalid price range: lower {lower} must be below upper {upper}")]
    InvalidRange { lower: f64, upper: f64 },

    #[error("Degenerate liquidity denominator: {denominator}")]
    DegenerateLiquidity { denominator: f64 },

    #[error("Invalid amount for {name}: {value}")]
    InvalidAmount { name: &'static str, value: f64 },

    #[error("Validation failed: {reason}")]
    ValidationError { reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ValuationError {
    fn from(err: config::ConfigError) -> Self {
        ValuationError::ConfigurationError {
            message: err.to_string(),
        }
    }
}

impl From<String> for ValuationError {
    fn from(reason: String) -> Self {
        ValuationError::ValidationError { reason }
    }
}

impl From<&str> for ValuationError {
    fn from(reason: &str) -> Self {
        ValuationError::ValidationError {
            reason: reason.to_string(),
        }
    }
}
