use serde::{Deserialize, Serialize};

use super::holding::Holding;

/// Column headers of the persisted portfolio file, in order.
pub const COLUMNS: [&str; 3] = ["Ticker", "Shares", "Purchase Price"];

/// The in-memory holdings table. Everything in here is written to the
/// CSV file on each mutation.
///
/// Rows keep insertion order; that order is what the console shows and
/// what performance records follow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_holdings(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Distinct tickers in first-seen order.
    pub fn distinct_tickers(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.holdings
            .iter()
            .map(|h| h.ticker.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }
}
