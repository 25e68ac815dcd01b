use std::env;
use std::fs;

use defi_portfolio_valuator::{
    config::Settings, models::PortfolioSnapshot, services::PortfolioValuator,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone())),
        )
        .init();

    info!("Starting portfolio valuator");

    let path = env::args()
        .nth(1)
        .ok_or("usage: defi-portfolio-valuator <snapshot.json>")?;
    let snapshot: PortfolioSnapshot = serde_json::from_str(&fs::read_to_string(&path)?)?;
    info!("Loaded portfolio snapshot from {}", path);

    let valuator = PortfolioValuator::new();
    let report = valuator.valuate(&snapshot, &settings.targets, &settings.aprs)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
