use log::info;

use crate::models::holding::Holding;
use crate::models::portfolio::Portfolio;

/// Manages the holdings table: appending lots and removing tickers.
///
/// No I/O and no API calls.
/// Persisting after each mutation is the caller's job (see `PortfolioTracker`).
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Append a holding row. Tickers are not merged: adding the same
    /// ticker twice yields two rows.
    pub fn add_holding(&self, portfolio: &mut Portfolio, holding: Holding) {
        info!(
            "Adding {} share(s) of {} at {}",
            holding.shares, holding.ticker, holding.purchase_price
        );
        portfolio.holdings.push(holding);
    }

    /// Remove every row whose ticker matches exactly (case-sensitive).
    /// Returns how many rows were dropped; zero is not an error.
    pub fn remove_ticker(&self, portfolio: &mut Portfolio, ticker: &str) -> usize {
        let before = portfolio.holdings.len();
        portfolio.holdings.retain(|h| h.ticker != ticker);
        let removed = before - portfolio.holdings.len();
        info!("Removed {removed} row(s) for {ticker}");
        removed
    }

    /// All rows for a ticker, in table order.
    pub fn holdings_for<'a>(&self, portfolio: &'a Portfolio, ticker: &str) -> Vec<&'a Holding> {
        portfolio
            .holdings
            .iter()
            .filter(|h| h.ticker == ticker)
            .collect()
    }

    /// Total shares held of a ticker across all of its rows.
    pub fn total_shares(&self, portfolio: &Portfolio, ticker: &str) -> f64 {
        self.holdings_for(portfolio, ticker)
            .iter()
            .map(|h| h.shares)
            .sum()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
