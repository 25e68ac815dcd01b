// Risk metrics and cross-zone balance ratios
pub mod allocation;
pub mod income;
pub mod metrics;

pub use allocation::*;
pub use income::*;
pub use metrics::*;
