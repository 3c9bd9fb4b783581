use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::price::HistoryPeriod;

/// Default location of the holdings file, relative to the working directory.
pub const DEFAULT_PORTFOLIO_FILE: &str = "portfolio.csv";

/// Runtime settings resolved by the front end before opening a tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Where holdings are loaded from and saved to.
    pub portfolio_path: PathBuf,

    /// Symbol printed in front of monetary totals (quotes are not converted).
    pub currency_symbol: String,

    /// Lookback window for the price chart.
    pub chart_period: HistoryPeriod,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            portfolio_path: PathBuf::from(DEFAULT_PORTFOLIO_FILE),
            currency_symbol: "$".to_string(),
            chart_period: HistoryPeriod::OneYear,
        }
    }
}

impl Settings {
    pub fn with_portfolio_path(path: impl Into<PathBuf>) -> Self {
        Self {
            portfolio_path: path.into(),
            ..Self::default()
        }
    }
}
