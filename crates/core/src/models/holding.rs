use serde::{Deserialize, Serialize};

/// One lot in the portfolio: a ticker, how many shares, and what was paid per share.
///
/// Field names map onto the persisted CSV header `Ticker,Shares,Purchase Price`.
/// Tickers are stored exactly as entered; no uppercasing or uniqueness check,
/// so the same symbol may appear on several rows (multiple lots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Exchange symbol (e.g., "AAPL", "MSFT")
    #[serde(rename = "Ticker")]
    pub ticker: String,

    /// Quantity held; may be fractional
    #[serde(rename = "Shares")]
    pub shares: f64,

    /// Price paid per share, in the quote currency of the ticker
    #[serde(rename = "Purchase Price")]
    pub purchase_price: f64,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, shares: f64, purchase_price: f64) -> Self {
        Self {
            ticker: ticker.into(),
            shares,
            purchase_price,
        }
    }

    /// Total amount paid for this lot (`shares × purchase_price`).
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.purchase_price
    }
}
