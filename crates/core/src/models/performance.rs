use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Gain/loss of one holding row at the latest quote. Recomputed on every
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    /// Ticker of the holding row
    pub ticker: String,

    /// Shares held on that row
    pub shares: f64,

    /// Price paid per share
    pub purchase_price: f64,

    /// Latest closing price per share
    pub current_price: f64,

    /// `current_price × shares`
    pub market_value: f64,

    /// `(current_price - purchase_price) × shares`
    pub gain_loss: f64,

    /// Percentage change per share relative to `purchase_price`; 0 when nothing was paid
    pub return_pct: f64,
}

impl PerformanceRecord {
    pub fn from_holding(holding: &Holding, current_price: f64) -> Self {
        let return_pct = if holding.purchase_price != 0.0 {
            (current_price - holding.purchase_price) / holding.purchase_price * 100.0
        } else {
            0.0
        };

        Self {
            ticker: holding.ticker.clone(),
            shares: holding.shares,
            purchase_price: holding.purchase_price,
            current_price,
            market_value: current_price * holding.shares,
            gain_loss: (current_price - holding.purchase_price) * holding.shares,
            return_pct,
        }
    }
}

/// Everything the console summary shows, taken from a single quote snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Holdings rows as stored
    pub holdings: Vec<Holding>,

    /// Sum of `current_price × shares` over all rows
    pub total_value: f64,

    /// One record per holding row, same order as `holdings`
    pub performance: Vec<PerformanceRecord>,

    /// Symbol used when printing monetary values
    pub currency_symbol: String,
}

impl PortfolioReport {
    /// Sum of gain/loss across all rows.
    pub fn total_gain_loss(&self) -> f64 {
        self.performance.iter().map(|p| p.gain_loss).sum()
    }

    /// Total paid across all rows.
    pub fn total_cost(&self) -> f64 {
        self.holdings.iter().map(Holding::cost_basis).sum()
    }
}
